use super::*;

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url("https://api.example.test/"), "https://api.example.test");
    assert_eq!(normalize_base_url("https://api.example.test//"), "https://api.example.test");
}

#[test]
fn normalize_base_url_falls_back_when_blank() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
    assert_eq!(normalize_base_url("/"), DEFAULT_API_BASE_URL);
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
