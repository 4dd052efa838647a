use super::*;

// =============================================================
// parse_response
// =============================================================

#[test]
fn parse_extracts_first_inline_image() {
    let json = r#"{
        "candidates": [{
            "content": {
                "parts": [
                    {"text": "Here is your image."},
                    {"inlineData": {"mimeType": "image/png", "data": "AQID"}}
                ]
            },
            "finishReason": "STOP"
        }]
    }"#;
    let payload = parse_response(json).unwrap();
    assert_eq!(payload.media_type, "image/png");
    assert_eq!(payload.bytes, vec![1, 2, 3]);
}

#[test]
fn parse_text_only_response_is_no_image() {
    let json = r#"{
        "candidates": [{
            "content": {"parts": [{"text": "I cannot edit this image."}]}
        }]
    }"#;
    assert!(matches!(parse_response(json), Err(GenError::NoImageReturned)));
}

#[test]
fn parse_empty_candidates_is_no_image() {
    assert!(matches!(parse_response(r#"{"candidates": []}"#), Err(GenError::NoImageReturned)));
    assert!(matches!(parse_response("{}"), Err(GenError::NoImageReturned)));
}

#[test]
fn parse_blocked_candidate_without_content_is_no_image() {
    let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
    assert!(matches!(parse_response(json), Err(GenError::NoImageReturned)));
}

#[test]
fn parse_malformed_json_is_parse_error() {
    assert!(matches!(parse_response("not json"), Err(GenError::ApiParse(_))));
}

#[test]
fn parse_invalid_inline_base64_is_parse_error() {
    let json = r#"{
        "candidates": [{
            "content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "!!"}}]}
        }]
    }"#;
    assert!(matches!(parse_response(json), Err(GenError::ApiParse(_))));
}

// =============================================================
// provider_message
// =============================================================

#[test]
fn provider_message_extracts_error_message() {
    let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
    assert_eq!(provider_message(body), "API key not valid");
}

#[test]
fn provider_message_falls_back_to_raw_body() {
    assert_eq!(provider_message("  upstream exploded  "), "upstream exploded");
}

// =============================================================
// Request serialization
// =============================================================

#[test]
fn request_body_shape_matches_api() {
    let body = ApiRequest {
        contents: [Content {
            parts: vec![
                Part {
                    inline_data: Some(InlineData { mime_type: "image/png", data: "AQID".into() }),
                    text: None,
                },
                Part { inline_data: None, text: Some("Make the subject look up.") },
            ],
        }],
        generation_config: GenerationConfig { response_modalities: ["IMAGE"] },
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["contents"][0]["parts"][0]["inlineData"]["mimeType"], "image/png");
    assert_eq!(json["contents"][0]["parts"][1]["text"], "Make the subject look up.");
    assert_eq!(json["generationConfig"]["responseModalities"][0], "IMAGE");
    // Absent fields are omitted, not null.
    assert!(json["contents"][0]["parts"][0].get("text").is_none());
}
