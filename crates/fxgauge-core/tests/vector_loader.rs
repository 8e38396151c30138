//! Fixture loader shared by document tests.
//!
//! Vectors are stored as UTF-8 so they stay readable in the repo; the
//! windows-1251 bytes the upstream actually sends are produced on load.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use encoding_rs::WINDOWS_1251;

pub fn load_text(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

/// Load a vector and re-encode it the way the upstream serves it.
pub fn load_cp1251(name: &str) -> Vec<u8> {
    let text = load_text(name);
    let (bytes, _, had_errors) = WINDOWS_1251.encode(&text);
    assert!(!had_errors, "vector {name} is not representable in windows-1251");
    bytes.into_owned()
}
