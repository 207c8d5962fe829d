use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use outpost::config::Config;
use tempfile::NamedTempFile;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.listen_addr, "127.0.0.1:4221");
    assert_eq!(cfg.base_dir, PathBuf::from("."));
    assert_eq!(cfg.request_timeout_secs, 30);
}

#[test]
fn test_config_env_overrides() {
    // All env manipulation lives in this one test so parallel tests in this
    // binary never race on the variables
    unsafe {
        std::env::remove_var("OUTPOST_CONFIG");
        std::env::set_var("OUTPOST_LISTEN", "0.0.0.0:3000");
        std::env::set_var("OUTPOST_DIR", "/srv/outpost");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.base_dir, PathBuf::from("/srv/outpost"));

    unsafe {
        std::env::remove_var("OUTPOST_LISTEN");
        std::env::remove_var("OUTPOST_DIR");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:4221");
    assert_eq!(cfg.base_dir, PathBuf::from("."));
}

#[test]
fn test_config_from_yaml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "listen_addr: \"0.0.0.0:9000\"").unwrap();
    writeln!(file, "base_dir: \"/srv/files\"").unwrap();
    writeln!(file, "request_timeout_secs: 5").unwrap();

    let cfg = Config::from_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:9000");
    assert_eq!(cfg.base_dir, PathBuf::from("/srv/files"));
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn test_config_partial_yaml_uses_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "listen_addr: \"127.0.0.1:8123\"").unwrap();

    let cfg = Config::from_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:8123");
    assert_eq!(cfg.base_dir, PathBuf::from("."));
    assert_eq!(cfg.request_timeout_secs, 30);
}

#[test]
fn test_config_invalid_yaml_errors() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "listen_addr: [not, a, string").unwrap();

    assert!(Config::from_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_config_missing_file_errors() {
    assert!(Config::from_file("/no/such/config.yaml").is_err());
}

#[test]
fn test_config_request_timeout_duration() {
    let cfg = Config {
        request_timeout_secs: 7,
        ..Config::default()
    };

    assert_eq!(cfg.request_timeout(), Duration::from_secs(7));
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();

    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.base_dir, cfg2.base_dir);
}
