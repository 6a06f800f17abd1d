#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use trackwire_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
sink:
  api_token: "secret"
  database_id: "db0"
store:
  base_url: "https://demo.firebaseio.com"
monitor:
  probe_timeot_ms: 5000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
sink:
  api_token: "secret"
  database_id: "db0"
store:
  base_url: "https://demo.firebaseio.com"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:3000");
    assert_eq!(cfg.sink.base_url, "https://api.notion.com");
    assert_eq!(cfg.monitor.probe_timeout_ms, 10000);
    assert!(cfg.monitor.probe_target().is_none());
}

#[test]
fn empty_sink_token_rejected() {
    let bad = r#"
version: 1
sink:
  api_token: ""
  database_id: "db0"
store:
  base_url: "https://demo.firebaseio.com"
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn non_http_store_url_rejected() {
    let bad = r#"
version: 1
sink:
  api_token: "secret"
  database_id: "db0"
store:
  base_url: "demo.firebaseio.com"
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn probe_timeout_out_of_range_rejected() {
    let bad = r#"
version: 1
sink:
  api_token: "secret"
  database_id: "db0"
store:
  base_url: "https://demo.firebaseio.com"
monitor:
  probe_timeout_ms: 100
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn placeholder_app_url_is_not_probed() {
    let cfg = config::load_from_str(
        r#"
version: 1
sink:
  api_token: "secret"
  database_id: "db0"
store:
  base_url: "https://demo.firebaseio.com"
monitor:
  app_url: "https://your-app.web.app"
"#,
    )
    .expect("must parse");
    assert!(cfg.monitor.probe_target().is_none());

    let cfg = config::load_from_str(
        r#"
version: 1
sink:
  api_token: "secret"
  database_id: "db0"
store:
  base_url: "https://demo.firebaseio.com"
monitor:
  app_url: "https://app.example.com"
"#,
    )
    .expect("must parse");
    assert_eq!(cfg.monitor.probe_target(), Some("https://app.example.com"));
}
