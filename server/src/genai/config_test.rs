use super::*;

fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    }
}

#[test]
fn missing_api_key_is_missing_credential() {
    let err = GenConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, GenError::MissingCredential));
}

#[test]
fn key_alone_uses_defaults() {
    let cfg = GenConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret")])).unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        GenTimeouts {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn overrides_are_applied() {
    let cfg = GenConfig::from_lookup(lookup_from(&[
        ("GEMINI_API_KEY", "secret"),
        ("GEMINI_MODEL", "gemini-x"),
        ("GEMINI_BASE_URL", "https://example.test/v1/"),
        ("GEMINI_REQUEST_TIMEOUT_SECS", "42"),
        ("GEMINI_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.model, "gemini-x");
    assert_eq!(cfg.base_url, "https://example.test/v1");
    assert_eq!(cfg.timeouts, GenTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn unparseable_timeout_falls_back_to_default() {
    let cfg = GenConfig::from_lookup(lookup_from(&[
        ("GEMINI_API_KEY", "secret"),
        ("GEMINI_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}
