#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::PathBuf;
use std::time::Duration;

use fxgauge_exporter::config::Settings;

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_when_unset() {
    let s = Settings::from_vars(vars(&[])).expect("must parse");
    assert_eq!(s.listen_addr.to_string(), "0.0.0.0:9393");
    assert_eq!(s.config_file, Some(PathBuf::from("./config.yaml")));
    assert_eq!(s.refresh_interval, Duration::from_secs(600));
    assert_eq!(s.fetch_timeout, Duration::from_secs(30));
    assert_eq!(s.upstream_url, "http://www.cbr.ru/scripts/XML_daily.asp");
}

#[test]
fn explicit_values() {
    let s = Settings::from_vars(vars(&[
        ("LISTEN_ADDR", "127.0.0.1:9000"),
        ("CONFIG_FILE", "/etc/fxgauge/mapping.yaml"),
        ("REFRESH_INTERVAL", "60"),
        ("FETCH_TIMEOUT", "5"),
        ("UPSTREAM_URL", "http://mirror.local/daily"),
        ("UNRELATED", "ignored"),
    ]))
    .expect("must parse");

    assert_eq!(s.listen_addr.port(), 9000);
    assert_eq!(s.config_file, Some(PathBuf::from("/etc/fxgauge/mapping.yaml")));
    assert_eq!(s.refresh_interval, Duration::from_secs(60));
    assert_eq!(s.fetch_timeout, Duration::from_secs(5));
    assert_eq!(s.upstream_url, "http://mirror.local/daily");
}

#[test]
fn bad_interval_falls_back_instead_of_zero() {
    for bad in ["abc", "0", "-5", "", "1.5"] {
        let s = Settings::from_vars(vars(&[("REFRESH_INTERVAL", bad)])).expect("must parse");
        assert_eq!(s.refresh_interval, Duration::from_secs(600), "value={bad:?}");
    }
}

#[test]
fn bad_timeout_falls_back() {
    let s = Settings::from_vars(vars(&[("FETCH_TIMEOUT", "soon")])).expect("must parse");
    assert_eq!(s.fetch_timeout, Duration::from_secs(30));
}

#[test]
fn empty_config_file_disables_mapping() {
    let s = Settings::from_vars(vars(&[("CONFIG_FILE", "")])).expect("must parse");
    assert_eq!(s.config_file, None);
}

#[test]
fn invalid_listen_addr_is_an_error() {
    let err = Settings::from_vars(vars(&[("LISTEN_ADDR", "not-an-addr")])).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}
