#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::Path;

use demohub_items::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
storage:
  data_fle: "x.json" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
log:
  filter: "demohub_items=debug"
storage:
  data_file: "/tmp/items.json"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.log.filter, "demohub_items=debug");
    assert_eq!(cfg.storage.data_file, Path::new("/tmp/items.json"));
}

#[test]
fn defaults() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.storage.data_file, Path::new("data/data.json"));
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
}

#[test]
fn version_is_required() {
    let err = config::load_from_str("storage: {}\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn empty_data_file_rejected() {
    let err = config::load_from_str("version: 1\nstorage:\n  data_file: \"\"\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn load_from_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.yaml");
    std::fs::write(&path, "version: 1\nstorage:\n  data_file: \"d.json\"\n").unwrap();

    let (cfg, from_file) = config::load_or_default(path.to_str().unwrap()).unwrap();
    assert!(from_file);
    assert_eq!(cfg.storage.data_file, Path::new("d.json"));
}

#[test]
fn shipped_sample_config_uses_default_filter() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../items.yaml");
    let cfg = config::load_from_file(path).expect("sample config must load");
    assert_eq!(cfg.log.filter, "info");
    assert_eq!(cfg.storage.data_file, Path::new("data/data.json"));
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
}
