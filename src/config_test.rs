use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_env_uses_defaults_then_overrides() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse().unwrap());

    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());

    unsafe { clear_server_env() };
}

#[test]
fn from_parts_trims_whitespace_and_accepts_ipv6() {
    let cfg = ServerConfig::from_parts(Some(" ::1 "), Some(" 4000 ")).unwrap();
    assert_eq!(cfg.addr, "[::1]:4000".parse().unwrap());
}

#[test]
fn empty_port_falls_back_to_default() {
    let cfg = ServerConfig::from_parts(None, Some("")).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["http", "-1", "70000"] {
        let err = ServerConfig::from_parts(None, Some(raw)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == raw));
    }
}

#[test]
fn invalid_host_is_rejected() {
    let err = ServerConfig::from_parts(Some("localhost"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { .. }));
    assert!(err.to_string().starts_with("invalid HOST \"localhost\""));
}
