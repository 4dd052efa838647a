use super::*;

// =============================================================
// Encoding
// =============================================================

#[test]
fn encode_produces_data_url() {
    let p = ImagePayload::new("image/png", vec![1, 2, 3]);
    assert_eq!(p.to_data_url(), "data:image/png;base64,AQID");
}

#[test]
fn encode_empty_bytes() {
    let p = ImagePayload::new("image/webp", Vec::new());
    assert_eq!(p.to_data_url(), "data:image/webp;base64,");
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_splits_media_type_and_bytes() {
    let p = ImagePayload::from_data_url("data:image/jpeg;base64,AQID").unwrap();
    assert_eq!(p.media_type, "image/jpeg");
    assert_eq!(p.bytes, vec![1, 2, 3]);
}

#[test]
fn round_trip_is_exact() {
    let original = ImagePayload::new("image/png", (0..=255).collect());
    let decoded = ImagePayload::from_data_url(&original.to_data_url()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn decode_rejects_missing_scheme() {
    let err = ImagePayload::from_data_url("image/png;base64,AQID").unwrap_err();
    assert_eq!(err, PayloadError::MalformedPayload("missing data: scheme"));
}

#[test]
fn decode_rejects_missing_base64_marker() {
    let err = ImagePayload::from_data_url("data:image/png,plain").unwrap_err();
    assert_eq!(err, PayloadError::MalformedPayload("missing base64 marker"));
}

#[test]
fn decode_rejects_empty_media_type() {
    let err = ImagePayload::from_data_url("data:;base64,AQID").unwrap_err();
    assert_eq!(err, PayloadError::MalformedPayload("empty media type"));
}

#[test]
fn decode_rejects_invalid_base64() {
    let err = ImagePayload::from_data_url("data:image/png;base64,!!notb64!!").unwrap_err();
    assert_eq!(err, PayloadError::MalformedPayload("invalid base64 data"));
}

// =============================================================
// Upload acceptance
// =============================================================

#[test]
fn accepted_upload_types() {
    for media in ACCEPTED_MEDIA_TYPES {
        assert!(ImagePayload::new(media, vec![0]).is_accepted_upload());
    }
}

#[test]
fn gif_is_not_accepted() {
    assert!(!ImagePayload::new("image/gif", vec![0]).is_accepted_upload());
}
