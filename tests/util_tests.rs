use clusterdeck::util::hostname_from_url;

#[test]
fn test_hostname_strips_scheme_and_path() {
    assert_eq!(
        hostname_from_url("https://api.example.com/v1/clusters"),
        "api.example.com"
    );
    assert_eq!(hostname_from_url("api.example.com"), "api.example.com");
    assert_eq!(hostname_from_url(""), "");
}

#[test]
fn test_hostname_keeps_port() {
    assert_eq!(
        hostname_from_url("http://localhost:8080/settings/admins"),
        "localhost:8080"
    );
}
