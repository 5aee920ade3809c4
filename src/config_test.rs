use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_trimmed_number() {
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    assert!(matches!(parse_port(Some("eighty")), Err(HostError::InvalidPort(v)) if v == "eighty"));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn addr_binds_all_interfaces() {
    let addr = HostConfig { port: 4000 }.addr();
    assert_eq!(addr.to_string(), "0.0.0.0:4000");
}
