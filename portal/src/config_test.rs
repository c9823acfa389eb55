use super::*;

#[test]
fn default_points_at_local_backend() {
    assert_eq!(ApiConfig::default().base_url(), "http://localhost:5000/api");
}

#[test]
fn new_trims_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.org/api///");
    assert_eq!(config.base_url(), "https://api.example.org/api");
}

#[test]
fn blank_override_falls_back_to_default() {
    assert_eq!(ApiConfig::from_override(Some("   ")), ApiConfig::default());
    assert_eq!(ApiConfig::from_override(None), ApiConfig::default());
}

#[test]
fn override_replaces_default() {
    let config = ApiConfig::from_override(Some("https://insper.example/api"));
    assert_eq!(config.base_url(), "https://insper.example/api");
}

#[test]
fn from_env_reads_override() {
    // API_URL is process-global; this is the only test that touches it.
    unsafe { std::env::set_var(API_URL_ENV, "https://env.example/api/") };
    let config = ApiConfig::from_env();
    unsafe { std::env::remove_var(API_URL_ENV) };
    assert_eq!(config.base_url(), "https://env.example/api");
}

#[test]
fn endpoint_joins_with_and_without_leading_slash() {
    let config = ApiConfig::new("http://localhost:5000/api");
    assert_eq!(config.endpoint("/eventos"), "http://localhost:5000/api/eventos");
    assert_eq!(config.endpoint("noticias/7"), "http://localhost:5000/api/noticias/7");
    assert_eq!(config.endpoint(""), "http://localhost:5000/api");
}

#[test]
fn asset_url_resolves_against_backend_origin() {
    let config = ApiConfig::new("http://localhost:5000/api");
    assert_eq!(config.asset_url("/uploads/a.png"), "http://localhost:5000/uploads/a.png");
    assert_eq!(config.asset_url("https://cdn.example/b.png"), "https://cdn.example/b.png");
    assert_eq!(config.asset_url(""), "");
}
