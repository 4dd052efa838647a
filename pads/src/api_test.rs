use super::*;

#[test]
fn generate_request_serializes_expected_fields() {
    let req = GenerateRequest {
        image: "data:image/png;base64,AQID".into(),
        prompt: "Make the subject look up.".into(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["image"], "data:image/png;base64,AQID");
    assert_eq!(json["prompt"], "Make the subject look up.");
}

#[test]
fn generate_response_round_trips() {
    let resp = GenerateResponse { image: "data:image/png;base64,AQID".into() };
    let json = serde_json::to_string(&resp).unwrap();
    let back: GenerateResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, resp);
}

#[test]
fn error_body_deserializes_from_server_shape() {
    let body: ApiErrorBody =
        serde_json::from_str(r#"{"error":"no image loaded","code":"E_MISSING_INPUT"}"#).unwrap();
    assert_eq!(body.error, "no image loaded");
    assert_eq!(body.code, "E_MISSING_INPUT");
}
