use serde_json::json;
use ssda_query::{compile, QueryParameters};

fn compile_payload(payload: serde_json::Value) -> serde_json::Value {
    let params: QueryParameters = serde_json::from_value(payload).unwrap();
    serde_json::to_value(compile(&params).unwrap()).unwrap()
}

#[test]
fn test_payload_to_serialized_tree() {
    let tree = compile_payload(json!({
        "general": {"proposalCode": "2020-2-SCI"},
        "target": {"declination": "-30 .. -40"},
        "telescope": {
            "name": "SALT",
            "instrument": {"name": "Salticam", "detectorMode": "Slot Mode", "filter": "clear"}
        }
    }));

    assert_eq!(
        tree,
        json!({"AND": [
            {"AND": [{"CONTAINS": {"column": "proposal.proposal_code", "value": "2020-2-SCI"}}]},
            {"AND": [{"AND": [
                {"GREATER_EQUAL": {"column": "target.dec", "value": -40.0}},
                {"LESS_EQUAL": {"column": "target.dec", "value": -30.0}}
            ]}]},
            {"AND": [
                {"NOT": {"IS_NULL": {"column": "observation.salt_id"}}},
                {"AND": [
                    {"NOT": {"IS_NULL": {"column": "salticam.salticam_id"}}},
                    {"EQUALS": {"column": "salticam.detector_mode", "value": "SLOT MODE"}},
                    {"EQUALS": {"column": "salticam.filter", "value": "clear"}}
                ]}
            ]}
        ]})
    );
}

#[test]
fn test_observation_night_serializes_as_utc_instants() {
    let tree = compile_payload(json!({"general": {"observationNight": "2019-07-15"}}));
    let night = &tree["AND"][0]["AND"][0]["AND"];

    let start = night[0]["GREATER_THAN"]["value"].as_str().unwrap();
    let end = night[1]["LESS_THAN"]["value"].as_str().unwrap();
    assert!(start.starts_with("2019-07-15T14:00:00"), "{start}");
    assert!(end.starts_with("2019-07-16T14:00:00"), "{end}");
}

#[test]
fn test_other_telescopes_and_unknown_instruments() {
    let tree = compile_payload(json!({
        "telescope": {"name": "Lesedi", "instrument": {"name": "SpUpNIC"}}
    }));
    assert_eq!(tree["AND"][2], json!({"AND": []}));

    let tree = compile_payload(json!({
        "telescope": {"name": "SALT", "instrument": {"name": "Mystery Spectrograph"}}
    }));
    assert_eq!(
        tree["AND"][2],
        json!({"AND": [{"NOT": {"IS_NULL": {"column": "observation.salt_id"}}}]})
    );
}
