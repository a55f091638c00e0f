//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives each service client
//! over real HTTP with the default `UreqTransport`. Validates that request
//! building, authentication and response parsing work together against an
//! actual server, including ETag round trips and error statuses.

use std::net::SocketAddr;
use std::sync::Arc;

use scc_sdk::compliance::{
    ComplianceV3, CreateProfileOptions, CreateScanOptions, DeleteCustomProfileOptions,
    GetProfileOptions, ListProfilesOptions, ProfileControlsPrototype, ProfileType,
};
use scc_sdk::configuration_governance::{
    ConditionOperator, ConfigurationGovernanceV1, CreateRulesOptions, DeleteRuleOptions,
    EnforcementAction, EnforcementActionType, GetRuleOptions, ListRulesOptions, Rule,
    RuleRequest, RuleRequiredConfig, TargetResource, UpdateRuleOptions,
};
use scc_sdk::findings::{
    CreateNoteOptions, CreateOccurrenceOptions, DeleteNoteOptions, FindingsV1, GetNoteOptions,
    NoteKind, PostGraphOptions, Reporter,
};
use scc_sdk::notifications::{
    ChannelType, CreateNotificationChannelOptions, DeleteNotificationChannelsOptions,
    GetNotificationChannelOptions, GetPublicKeyOptions, NotificationsV1,
};
use scc_sdk::{ApiError, IamAuthenticator, NoAuthAuthenticator, ServiceOptions};
use serde_json::Value;

/// Start the mock server on a random port and return its address.
fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
    });
    addr
}

fn options(service_url: String) -> ServiceOptions {
    ServiceOptions {
        service_url: Some(service_url),
        authenticator: Some(Arc::new(NoAuthAuthenticator)),
        ..Default::default()
    }
}

/// Requests the mock server has recorded so far.
fn recorded(addr: SocketAddr) -> Vec<Value> {
    let mut response = ureq::get(format!("http://{addr}/_mock/requests"))
        .call()
        .unwrap();
    let body = response.body_mut().read_to_string().unwrap();
    serde_json::from_str(&body).unwrap()
}

#[test]
fn compliance_profile_lifecycle() {
    let addr = start_server();
    let svc = ComplianceV3::new(options(format!("http://{addr}"))).unwrap();

    // Step 1: create.
    let created = svc
        .create_profile(&CreateProfileOptions {
            instance_id: Some("inst-1".into()),
            profile_name: Some("prod baseline".into()),
            profile_type: Some(ProfileType::Custom),
            controls: Some(vec![ProfileControlsPrototype {
                control_library_id: Some("lib-1".into()),
                control_id: Some("ctl-1".into()),
            }]),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(created.status, 201);
    let profile_id = created.result.id.clone().unwrap();
    assert_eq!(created.result.controls_count, Some(1));

    // Step 2: read back.
    let fetched = svc
        .get_profile(&GetProfileOptions {
            instance_id: Some("inst-1".into()),
            profiles_id: Some(profile_id.clone()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(fetched.result.profile_name.as_deref(), Some("prod baseline"));
    assert_eq!(fetched.result.profile_type, Some(ProfileType::Custom));

    // Step 3: list filtered by type.
    let listed = svc
        .list_profiles(&ListProfilesOptions {
            instance_id: Some("inst-1".into()),
            profile_type: Some(ProfileType::Custom),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(listed.result.total_count, Some(1));

    // Step 4: scan.
    let scan = svc
        .create_scan(&CreateScanOptions {
            instance_id: Some("inst-1".into()),
            attachment_id: Some("att-1".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(scan.result.attachment_id.as_deref(), Some("att-1"));

    // Step 5: delete, then the profile is gone.
    svc.delete_custom_profile(&DeleteCustomProfileOptions {
        instance_id: Some("inst-1".into()),
        profiles_id: Some(profile_id.clone()),
        ..Default::default()
    })
    .unwrap();
    let err = svc
        .get_profile(&GetProfileOptions {
            instance_id: Some("inst-1".into()),
            profiles_id: Some(profile_id),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)), "got {err:?}");
    assert_eq!(err.status(), Some(404));
}

fn rule(account: &str) -> Rule {
    Rule {
        account_id: Some(account.into()),
        name: Some("public access off".into()),
        description: Some("buckets must not be public".into()),
        target: Some(TargetResource {
            service_name: Some("cloud-object-storage".into()),
            resource_kind: Some("bucket".into()),
            additional_target_attributes: None,
        }),
        required_config: Some(RuleRequiredConfig {
            property: Some("public_access_enabled".into()),
            operator: Some(ConditionOperator::IsFalse),
            ..Default::default()
        }),
        enforcement_actions: Some(vec![EnforcementAction {
            action: Some(EnforcementActionType::Disallow),
        }]),
        ..Default::default()
    }
}

fn update_from(rule_id: &str, etag: &str, rule: Rule) -> UpdateRuleOptions {
    UpdateRuleOptions {
        rule_id: Some(rule_id.into()),
        if_match: Some(etag.into()),
        name: rule.name,
        description: Some("updated".into()),
        target: rule.target,
        required_config: rule.required_config,
        enforcement_actions: rule.enforcement_actions,
        account_id: rule.account_id,
        ..Default::default()
    }
}

#[test]
fn governance_rule_etag_round_trip() {
    let addr = start_server();
    let svc = ConfigurationGovernanceV1::new(options(format!("http://{addr}"))).unwrap();

    let created = svc
        .create_rules(&CreateRulesOptions {
            rules: Some(vec![RuleRequest {
                request_id: Some("r1".into()),
                rule: Some(rule("acct")),
            }]),
            ..Default::default()
        })
        .unwrap();
    let results = created.result.rules.unwrap();
    assert_eq!(results[0].status_code, Some(201));
    let rule_id = results[0].rule.as_ref().unwrap().rule_id.clone().unwrap();

    let listed = svc
        .list_rules(&ListRulesOptions {
            account_id: Some("acct".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(listed.result.total_count, Some(1));

    // The ETag from a read is the precondition for the update.
    let fetched = svc
        .get_rule(&GetRuleOptions {
            rule_id: Some(rule_id.clone()),
            ..Default::default()
        })
        .unwrap();
    let etag = fetched.header("ETag").unwrap().to_string();

    let updated = svc
        .update_rule(&update_from(&rule_id, &etag, fetched.result.clone()))
        .unwrap();
    assert_eq!(updated.result.description.as_deref(), Some("updated"));
    assert_ne!(updated.header("ETag"), Some(etag.as_str()));

    // Reusing the stale ETag fails the precondition.
    let err = svc
        .update_rule(&update_from(&rule_id, &etag, fetched.result))
        .unwrap_err();
    match err {
        ApiError::Http { status, ref message, .. } => {
            assert_eq!(status, 412);
            assert!(message.contains("was modified"), "message: {message}");
        }
        other => panic!("unexpected error: {other}"),
    }

    let deleted = svc
        .delete_rule(&DeleteRuleOptions {
            rule_id: Some(rule_id.clone()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(deleted.status, 204);
    let err = svc
        .get_rule(&GetRuleOptions {
            rule_id: Some(rule_id),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
fn notification_channels_and_bulk_delete() {
    let addr = start_server();
    let svc = NotificationsV1::new(options(format!("http://{addr}/notifications"))).unwrap();

    let mut ids = Vec::new();
    for name in ["ops", "sec"] {
        let created = svc
            .create_notification_channel(&CreateNotificationChannelOptions {
                account_id: Some("acct".into()),
                name: Some(name.into()),
                channel_type: Some(ChannelType::Webhook),
                endpoint: Some(format!("https://hooks.example.com/{name}")),
                ..Default::default()
            })
            .unwrap();
        ids.push(created.result.channel_id.unwrap());
    }

    let got = svc
        .get_notification_channel(&GetNotificationChannelOptions {
            account_id: Some("acct".into()),
            channel_id: Some(ids[0].clone()),
            ..Default::default()
        })
        .unwrap();
    let channel = got.result.channel.unwrap();
    assert_eq!(channel.channel_type, Some(ChannelType::Webhook));
    assert_eq!(channel.name.as_deref(), Some("ops"));

    let deleted = svc
        .delete_notification_channels(&DeleteNotificationChannelsOptions {
            account_id: Some("acct".into()),
            request_body: Some(ids.clone()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(deleted.result.message.as_deref(), Some("Deleted 2 channels"));

    let err = svc
        .get_notification_channel(&GetNotificationChannelOptions {
            account_id: Some("acct".into()),
            channel_id: Some(ids[1].clone()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let key = svc
        .get_public_key(&GetPublicKeyOptions {
            account_id: Some("acct".into()),
            ..Default::default()
        })
        .unwrap();
    assert!(key.result.public_key.unwrap().contains("BEGIN PUBLIC KEY"));
}

#[test]
fn findings_graph_notes_and_occurrences() {
    let addr = start_server();
    let svc = FindingsV1::new(options(format!("http://{addr}/findings"))).unwrap();

    let graph = svc
        .post_graph(&PostGraphOptions {
            account_id: Some("acct".into()),
            body: Some("{ notes { id } }".into()),
            content_type: Some("application/graphql".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(graph.result["data"]["content_type"], "application/graphql");
    assert_eq!(graph.result["data"]["query"], "{ notes { id } }");

    let note = CreateNoteOptions {
        account_id: Some("acct".into()),
        provider_id: Some("scanner".into()),
        short_description: Some("weak tls".into()),
        long_description: Some("TLS below 1.2 accepted".into()),
        kind: Some(NoteKind::Finding),
        id: Some("weak-tls".into()),
        reported_by: Some(Reporter {
            id: Some("scanner".into()),
            title: Some("TLS scanner".into()),
            url: None,
        }),
        ..Default::default()
    };
    svc.create_note(&note).unwrap();
    let err = svc.create_note(&note).unwrap_err();
    assert_eq!(err.status(), Some(409));

    let fetched = svc
        .get_note(&GetNoteOptions {
            account_id: Some("acct".into()),
            provider_id: Some("scanner".into()),
            note_id: Some("weak-tls".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(fetched.result.kind, Some(NoteKind::Finding));

    let mut occurrence = CreateOccurrenceOptions {
        account_id: Some("acct".into()),
        provider_id: Some("scanner".into()),
        note_name: Some("acct/providers/scanner/notes/weak-tls".into()),
        kind: Some(NoteKind::Finding),
        id: Some("occ-1".into()),
        ..Default::default()
    };
    svc.create_occurrence(&occurrence).unwrap();
    let err = svc.create_occurrence(&occurrence).unwrap_err();
    assert_eq!(err.status(), Some(409));

    occurrence.replace_if_exists = Some(true);
    occurrence.remediation = Some("disable TLS 1.0".into());
    let replaced = svc.create_occurrence(&occurrence).unwrap();
    assert_eq!(replaced.result.remediation.as_deref(), Some("disable TLS 1.0"));

    // The service answers a note delete with an empty 200.
    let deleted = svc
        .delete_note(&DeleteNoteOptions {
            account_id: Some("acct".into()),
            provider_id: Some("scanner".into()),
            note_id: Some("weak-tls".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(deleted.status, 200);
}

#[test]
fn iam_token_is_exchanged_and_sent() {
    let addr = start_server();
    let authenticator = IamAuthenticator::new("key-1")
        .unwrap()
        .with_url(format!("http://{addr}"));
    let svc = NotificationsV1::new(ServiceOptions {
        service_url: Some(format!("http://{addr}/notifications")),
        authenticator: Some(Arc::new(authenticator)),
        ..Default::default()
    })
    .unwrap();

    for _ in 0..2 {
        svc.get_public_key(&GetPublicKeyOptions {
            account_id: Some("acct".into()),
            ..Default::default()
        })
        .unwrap();
    }

    let requests = recorded(addr);
    let token_calls = requests
        .iter()
        .filter(|r| r["uri"] == "/identity/token")
        .count();
    assert_eq!(token_calls, 1, "token should be cached between calls");

    let api_calls: Vec<&Value> = requests
        .iter()
        .filter(|r| r["uri"] == "/notifications/v1/acct/notifications/public_key")
        .collect();
    assert_eq!(api_calls.len(), 2);
    for call in api_calls {
        assert_eq!(call["headers"]["authorization"], "Bearer token-for-key-1");
        assert_eq!(
            call["headers"]["x-ibmcloud-sdk-analytics"],
            "service_name=notifications;service_version=V1;operation_id=get_public_key"
        );
    }
}

#[test]
fn iam_endpoint_without_token_fails_the_call() {
    let addr = start_server();
    // Unknown mock routes echo the request, which carries no access token.
    let authenticator = IamAuthenticator::new("key-1")
        .unwrap()
        .with_url(format!("http://{addr}/nowhere/at/all"));
    let svc = ComplianceV3::new(ServiceOptions {
        service_url: Some(format!("http://{addr}")),
        authenticator: Some(Arc::new(authenticator)),
        ..Default::default()
    })
    .unwrap();

    let err = svc
        .get_profile(&GetProfileOptions {
            instance_id: Some("inst-1".into()),
            profiles_id: Some("p".into()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::Deserialization(_)), "got {err:?}");
    let requests = recorded(addr);
    assert!(requests.iter().all(|r| r["uri"] != "/instances/inst-1/v3/profiles/p"));
}
