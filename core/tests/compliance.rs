#[macro_use]
mod common;

use common::{body_json, json_response, options, Recorder, SERVICE_URL};
use scc_sdk::compliance::*;
use scc_sdk::{ApiError, HttpMethod};
use serde_json::json;

fn client(transport: std::sync::Arc<Recorder>) -> ComplianceV3 {
    ComplianceV3::new(options(transport)).unwrap()
}

#[test]
fn create_profile_shapes_request() {
    let transport = Recorder::replying(vec![json_response(
        201,
        r#"{"id":"p-1","profile_name":"baseline","profile_type":"custom","controls_count":1}"#,
    )]);
    let svc = client(transport.clone());

    let response = svc
        .create_profile(&CreateProfileOptions {
            instance_id: Some("inst-1".into()),
            profile_name: Some("baseline".into()),
            profile_type: Some(ProfileType::Custom),
            profile_description: Some("org baseline".into()),
            controls: Some(vec![ProfileControlsPrototype {
                control_library_id: Some("lib-1".into()),
                control_id: Some("ctl-1".into()),
            }]),
            default_parameters: Some(vec![]),
            transaction_id: Some("tx-42".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(response.status, 201);
    assert_eq!(response.result.id.as_deref(), Some("p-1"));
    assert_eq!(response.result.controls_count, Some(1));

    let req = transport.last();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, format!("{SERVICE_URL}/instances/inst-1/v3/profiles"));
    assert_eq!(req.header("Accept"), Some("application/json"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Transaction-Id"), Some("tx-42"));
    assert_eq!(
        req.header("X-IBMCloud-SDK-Analytics"),
        Some("service_name=compliance;service_version=V3;operation_id=create_profile")
    );
    assert!(req.header("User-Agent").unwrap().starts_with("scc-sdk-rust/"));
    assert_eq!(
        body_json(&req),
        json!({
            "profile_name": "baseline",
            "profile_description": "org baseline",
            "profile_type": "custom",
            "controls": [{"control_library_id": "lib-1", "control_id": "ctl-1"}],
            "default_parameters": [],
        })
    );
}

#[test]
fn missing_required_fields_never_reach_transport() {
    let transport = Recorder::new();
    let svc = client(transport.clone());

    let err = svc
        .create_profile(&CreateProfileOptions {
            instance_id: Some("inst-1".into()),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "Missing required parameters: profile_name, profile_type");

    let err = svc.create_profile(&CreateProfileOptions::default()).unwrap_err();
    match err {
        ApiError::MissingParameters(names) => {
            assert_eq!(names, ["instance_id", "profile_name", "profile_type"])
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = svc
        .get_parameters_by_name(&GetParametersByNameOptions {
            instance_id: Some("i".into()),
            profiles_id: Some("p".into()),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required parameters: attachment_id, parameter_name"
    );
    assert_eq!(transport.count(), 0);
}

#[test]
fn replace_parameter_by_name_strips_new_prefix() {
    let transport = Recorder::new();
    let svc = client(transport.clone());

    svc.replace_attachment_parameters_by_name(&ReplaceAttachmentParametersByNameOptions {
        instance_id: Some("i1".into()),
        profiles_id: Some("p1".into()),
        attachment_id: Some("a1".into()),
        parameter_name: Some("tls_version".into()),
        new_assessment_type: Some("automated".into()),
        new_parameter_name: Some("tls_version".into()),
        new_parameter_type: Some("string_list".into()),
        new_parameter_value: Some("['1.2','1.3']".into()),
        ..Default::default()
    })
    .unwrap();

    let req = transport.last();
    assert_eq!(req.method, HttpMethod::Put);
    assert_eq!(
        req.url,
        format!("{SERVICE_URL}/instances/i1/v3/profiles/p1/attachments/a1/parameters/tls_version")
    );
    assert_eq!(
        body_json(&req),
        json!({
            "assessment_type": "automated",
            "parameter_name": "tls_version",
            "parameter_type": "string_list",
            "parameter_value": "['1.2','1.3']",
        })
    );
}

#[test]
fn list_operations_send_query_and_no_body() {
    let transport = Recorder::new();
    let svc = client(transport.clone());

    svc.list_control_libraries(&ListControlLibrariesOptions {
        instance_id: Some("i1".into()),
        limit: Some(50),
        control_library_type: Some(ControlLibraryType::Custom),
        ..Default::default()
    })
    .unwrap();
    let req = transport.last();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(
        req.url,
        format!("{SERVICE_URL}/instances/i1/v3/control_libraries?limit=50&control_library_type=custom")
    );
    assert_eq!(req.body, None);
    assert_eq!(req.header("Content-Type"), None);

    svc.list_attachments_account(&ListAttachmentsAccountOptions {
        instance_id: Some("i1".into()),
        start: Some("next page".into()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        transport.last().url,
        format!("{SERVICE_URL}/instances/i1/v3/attachments?start=next%20page")
    );
}

#[test]
fn path_values_are_percent_encoded() {
    let transport = Recorder::new();
    let svc = client(transport.clone());

    svc.get_profile(&GetProfileOptions {
        instance_id: Some("inst 1".into()),
        profiles_id: Some("a/b".into()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        transport.last().url,
        format!("{SERVICE_URL}/instances/inst%201/v3/profiles/a%2Fb")
    );
}

#[test]
fn caller_headers_override_computed_ones() {
    let transport = Recorder::new();
    let svc = client(transport.clone());

    svc.create_scan(&CreateScanOptions {
        instance_id: Some("i1".into()),
        attachment_id: Some("att-1".into()),
        transaction_id: Some("from-field".into()),
        headers: vec![
            ("accept".into(), "text/csv".into()),
            ("CONTENT-TYPE".into(), "application/vnd.scan+json".into()),
            ("transaction-id".into(), "from-caller".into()),
        ],
    })
    .unwrap();

    let req = transport.last();
    assert_eq!(req.header("Accept"), Some("text/csv"));
    assert_eq!(req.header("Content-Type"), Some("application/vnd.scan+json"));
    assert_eq!(req.header("Transaction-Id"), Some("from-caller"));
    assert_eq!(
        req.headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("accept"))
            .count(),
        1
    );
    assert_eq!(body_json(&req), json!({"attachment_id": "att-1"}));
}

#[test]
fn attachment_enums_serialize_with_wire_spelling() {
    let transport = Recorder::new();
    let svc = client(transport.clone());

    svc.replace_profile_attachment(&ReplaceProfileAttachmentOptions {
        instance_id: Some("i1".into()),
        profiles_id: Some("p1".into()),
        attachment_id: Some("a1".into()),
        status: Some(AttachmentStatus::Enabled),
        schedule: Some(ScanSchedule::Every30Days),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        body_json(&transport.last()),
        json!({"status": "enabled", "schedule": "every_30_days"})
    );
}

#[test]
fn not_found_maps_to_dedicated_variant() {
    let transport = Recorder::replying(vec![json_response(
        404,
        r#"{"errors":[{"code":"not_found","message":"Profile p-9 was not found"}]}"#,
    )]);
    let svc = client(transport);

    let err = svc
        .delete_custom_profile(&DeleteCustomProfileOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p-9".into()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(ref m) if m == "Profile p-9 was not found"));
    assert_eq!(err.status(), Some(404));
}

#[test]
fn clients_with_equal_options_report_equal_base_options() {
    let a = client(Recorder::new());
    let b = client(Recorder::new());
    assert_eq!(a.base().base_options(), b.base().base_options());
    assert_eq!(a.base().base_options().service_name, "compliance");
    assert_eq!(a.base().base_options().authentication_type, "noAuth");
    assert_eq!(
        ComplianceV3::DEFAULT_SERVICE_URL,
        "https://us-south.compliance.cloud.ibm.com"
    );
    assert_eq!(ComplianceV3::DEFAULT_SERVICE_NAME, "compliance");
}

#[test]
fn profile_with_unrecognised_type_still_parses() {
    let transport = Recorder::replying(vec![json_response(
        200,
        r#"{"id":"p1","profile_type":"company"}"#,
    )]);
    let svc = client(transport);

    let profile = svc
        .get_profile(&GetProfileOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            ..Default::default()
        })
        .unwrap()
        .result;
    assert_eq!(profile.id.as_deref(), Some("p1"));
    assert_eq!(profile.profile_type, Some(ProfileType::Unknown));
}

fn control() -> ControlsInControlLib {
    ControlsInControlLib {
        control_name: Some("SC-7".into()),
        control_id: Some("ctl-1".into()),
        ..Default::default()
    }
}

fn scope() -> MultiCloudScope {
    MultiCloudScope {
        environment: Some("ibm-cloud".into()),
        properties: Some(vec![PropertyItem {
            name: Some("scope_id".into()),
            value: Some("acct-1".into()),
        }]),
    }
}

fn tls_parameter() -> AttachmentParameter {
    AttachmentParameter {
        assessment_id: Some("rule-1".into()),
        parameter_name: Some("tls".into()),
        parameter_value: Some("1.2".into()),
        parameter_type: Some("string".into()),
        ..Default::default()
    }
}

fn default_tls() -> DefaultParameters {
    DefaultParameters {
        assessment_id: Some("rule-1".into()),
        parameter_name: Some("tls".into()),
        parameter_default_value: Some("1.2".into()),
        ..Default::default()
    }
}

#[test]
fn every_operation_validates_and_shapes_requests() {
    let transport = Recorder::new();
    let svc = client(transport.clone());
    let library = json!({
        "control_library_name": "lib",
        "control_library_description": "in-house controls",
        "control_library_type": "custom",
        "controls": [{"control_name": "SC-7", "control_id": "ctl-1"}],
        "version_group_label": "g1",
        "control_library_version": "1.0.0",
        "latest": true,
        "controls_count": 1
    });
    let profile = json!({
        "profile_name": "baseline",
        "profile_description": "starter",
        "profile_type": "custom",
        "controls": [{"control_library_id": "lib-1", "control_id": "ctl-1"}],
        "default_parameters": [
            {"assessment_id": "rule-1", "parameter_name": "tls", "parameter_default_value": "1.2"}
        ]
    });
    let parameter = json!({
        "assessment_id": "rule-1",
        "parameter_name": "tls",
        "parameter_value": "1.2",
        "parameter_type": "string"
    });
    let scope_json = json!({
        "environment": "ibm-cloud",
        "properties": [{"name": "scope_id", "value": "acct-1"}]
    });

    let covered = check_operations!(svc, transport, {
        list_control_libraries(ListControlLibrariesOptions {
            instance_id: Some("i1".into()),
            limit: Some(10),
            control_library_type: Some(ControlLibraryType::Custom),
            start: Some("abc".into()),
            ..Default::default()
        }) => Get "/instances/i1/v3/control_libraries?limit=10&control_library_type=custom&start=abc", None;

        create_custom_control_library(CreateCustomControlLibraryOptions {
            instance_id: Some("i1".into()),
            control_library_name: Some("lib".into()),
            control_library_description: Some("in-house controls".into()),
            control_library_type: Some(ControlLibraryType::Custom),
            controls: Some(vec![control()]),
            version_group_label: Some("g1".into()),
            control_library_version: Some("1.0.0".into()),
            latest: Some(true),
            controls_count: Some(1),
            ..Default::default()
        }) => Post "/instances/i1/v3/control_libraries", Some(library.clone());

        delete_custom_control_library(DeleteCustomControlLibraryOptions {
            instance_id: Some("i1".into()),
            control_libraries_id: Some("lib-1".into()),
            ..Default::default()
        }) => Delete "/instances/i1/v3/control_libraries/lib-1", None;

        get_control_library(GetControlLibraryOptions {
            instance_id: Some("i1".into()),
            control_libraries_id: Some("lib-1".into()),
            ..Default::default()
        }) => Get "/instances/i1/v3/control_libraries/lib-1", None;

        replace_custom_control_library(ReplaceCustomControlLibraryOptions {
            instance_id: Some("i1".into()),
            control_libraries_id: Some("lib-1".into()),
            control_library_name: Some("lib".into()),
            control_library_description: Some("in-house controls".into()),
            control_library_type: Some(ControlLibraryType::Custom),
            controls: Some(vec![control()]),
            version_group_label: Some("g1".into()),
            control_library_version: Some("1.0.0".into()),
            latest: Some(true),
            controls_count: Some(1),
            ..Default::default()
        }) => Put "/instances/i1/v3/control_libraries/lib-1", Some(library.clone());

        list_profiles(ListProfilesOptions {
            instance_id: Some("i1".into()),
            limit: Some(5),
            profile_type: Some(ProfileType::Predefined),
            start: Some("p".into()),
            ..Default::default()
        }) => Get "/instances/i1/v3/profiles?limit=5&profile_type=predefined&start=p", None;

        create_profile(CreateProfileOptions {
            instance_id: Some("i1".into()),
            profile_name: Some("baseline".into()),
            profile_type: Some(ProfileType::Custom),
            profile_description: Some("starter".into()),
            controls: Some(vec![ProfileControlsPrototype {
                control_library_id: Some("lib-1".into()),
                control_id: Some("ctl-1".into()),
            }]),
            default_parameters: Some(vec![default_tls()]),
            ..Default::default()
        }) => Post "/instances/i1/v3/profiles", Some(profile.clone());

        delete_custom_profile(DeleteCustomProfileOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            ..Default::default()
        }) => Delete "/instances/i1/v3/profiles/p1", None;

        get_profile(GetProfileOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            ..Default::default()
        }) => Get "/instances/i1/v3/profiles/p1", None;

        replace_profile(ReplaceProfileOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            profile_name: Some("baseline".into()),
            profile_type: Some(ProfileType::Custom),
            profile_description: Some("starter".into()),
            controls: Some(vec![ProfileControlsPrototype {
                control_library_id: Some("lib-1".into()),
                control_id: Some("ctl-1".into()),
            }]),
            default_parameters: Some(vec![default_tls()]),
            ..Default::default()
        }) => Put "/instances/i1/v3/profiles/p1", Some(profile.clone());

        get_profile_default_parameters(GetProfileDefaultParametersOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            ..Default::default()
        }) => Get "/instances/i1/v3/profiles/p1/parameters", None;

        replace_profile_parameters(ReplaceProfileParametersOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            id: Some("p1".into()),
            default_parameters: Some(vec![default_tls()]),
            ..Default::default()
        }) => Put "/instances/i1/v3/profiles/p1/parameters", Some(json!({
            "id": "p1",
            "default_parameters": profile["default_parameters"]
        }));

        create_attachment(CreateAttachmentOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            attachments: Some(vec![AttachmentsPrototype {
                name: Some("nightly".into()),
                scope: Some(vec![scope()]),
                status: Some(AttachmentStatus::Enabled),
                schedule: Some(ScanSchedule::Daily),
                ..Default::default()
            }]),
            profile_id: Some("p1".into()),
            ..Default::default()
        }) => Post "/instances/i1/v3/profiles/p1/attachments", Some(json!({
            "attachments": [{
                "name": "nightly",
                "scope": [scope_json.clone()],
                "status": "enabled",
                "schedule": "daily"
            }],
            "profile_id": "p1"
        }));

        list_attachments(ListAttachmentsOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            limit: Some(2),
            start: Some("a".into()),
            ..Default::default()
        }) => Get "/instances/i1/v3/profiles/p1/attachments?limit=2&start=a", None;

        get_profile_attachment(GetProfileAttachmentOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            attachment_id: Some("a1".into()),
            ..Default::default()
        }) => Get "/instances/i1/v3/profiles/p1/attachments/a1", None;

        replace_profile_attachment(ReplaceProfileAttachmentOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            attachment_id: Some("a1".into()),
            name: Some("weekly".into()),
            description: Some("every week".into()),
            scope: Some(vec![scope()]),
            status: Some(AttachmentStatus::Disabled),
            schedule: Some(ScanSchedule::Every7Days),
            notifications: Some(AttachmentsNotifications {
                enabled: Some(false),
                ..Default::default()
            }),
            attachment_parameters: Some(vec![tls_parameter()]),
            ..Default::default()
        }) => Put "/instances/i1/v3/profiles/p1/attachments/a1", Some(json!({
            "name": "weekly",
            "description": "every week",
            "scope": [scope_json.clone()],
            "status": "disabled",
            "schedule": "every_7_days",
            "notifications": {"enabled": false},
            "attachment_parameters": [parameter.clone()]
        }));

        delete_profile_attachment(DeleteProfileAttachmentOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            attachment_id: Some("a1".into()),
            ..Default::default()
        }) => Delete "/instances/i1/v3/profiles/p1/attachments/a1", None;

        list_attachments_account(ListAttachmentsAccountOptions {
            instance_id: Some("i1".into()),
            limit: Some(3),
            ..Default::default()
        }) => Get "/instances/i1/v3/attachments?limit=3", None;

        create_scan(CreateScanOptions {
            instance_id: Some("i1".into()),
            attachment_id: Some("a1".into()),
            ..Default::default()
        }) => Post "/instances/i1/v3/scans", Some(json!({"attachment_id": "a1"}));

        get_attachment_parameters(GetAttachmentParametersOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            attachment_id: Some("a1".into()),
            ..Default::default()
        }) => Get "/instances/i1/v3/profiles/p1/attachments/a1/parameters", None;

        replace_attachment_parameters(ReplaceAttachmentParametersOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            attachment_id: Some("a1".into()),
            parameters: Some(vec![tls_parameter()]),
            ..Default::default()
        }) => Put "/instances/i1/v3/profiles/p1/attachments/a1/parameters",
            Some(json!({"parameters": [parameter.clone()]}));

        get_parameters_by_name(GetParametersByNameOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            attachment_id: Some("a1".into()),
            parameter_name: Some("tls".into()),
            ..Default::default()
        }) => Get "/instances/i1/v3/profiles/p1/attachments/a1/parameters/tls", None;

        replace_attachment_parameters_by_name(ReplaceAttachmentParametersByNameOptions {
            instance_id: Some("i1".into()),
            profiles_id: Some("p1".into()),
            attachment_id: Some("a1".into()),
            parameter_name: Some("tls".into()),
            new_assessment_id: Some("rule-1".into()),
            new_parameter_name: Some("tls_min".into()),
            new_parameter_value: Some("1.3".into()),
            ..Default::default()
        }) => Put "/instances/i1/v3/profiles/p1/attachments/a1/parameters/tls", Some(json!({
            "assessment_id": "rule-1",
            "parameter_name": "tls_min",
            "parameter_value": "1.3"
        }));
    });

    assert_eq!(covered.len(), 23);
    assert_eq!(transport.count(), 0);
}
