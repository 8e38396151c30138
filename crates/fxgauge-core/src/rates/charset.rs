//! Charset detection and decoding for upstream XML bodies.
//!
//! The upstream declares its encoding in the XML declaration. Only two
//! encodings are accepted: UTF-8 (also assumed when nothing is declared) and
//! windows-1251. Labels are resolved through the WHATWG label table, so
//! aliases such as `cp1251` resolve to the same decoder.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1251};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{FxError, Result};

const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

/// Return the `encoding` pseudo-attribute of the XML declaration, if any.
pub fn declared_charset(raw: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(raw);
    let mut buf = Vec::new();

    match reader.read_event_into(&mut buf) {
        Ok(Event::Decl(decl)) => match decl.encoding() {
            Some(Ok(label)) => Ok(Some(String::from_utf8_lossy(&label).trim().to_string())),
            Some(Err(e)) => Err(FxError::MalformedDocument(format!(
                "bad xml declaration: {e}"
            ))),
            None => Ok(None),
        },
        Ok(_) => Ok(None),
        Err(e) => Err(FxError::MalformedDocument(e.to_string())),
    }
}

/// Resolve a declared label to one of the supported encodings.
pub fn resolve(label: Option<&str>) -> Result<&'static Encoding> {
    let Some(label) = label else {
        return Ok(UTF_8);
    };

    match Encoding::for_label(label.as_bytes()) {
        Some(enc) if enc == UTF_8 || enc == WINDOWS_1251 => Ok(enc),
        _ => Err(FxError::UnsupportedCharset(label.to_string())),
    }
}

/// Decode an upstream body to text according to its declared charset.
pub fn decode_body(raw: &[u8]) -> Result<Cow<'_, str>> {
    if let Some(rest) = raw.strip_prefix(UTF8_BOM) {
        return std::str::from_utf8(rest)
            .map(Cow::Borrowed)
            .map_err(|e| FxError::MalformedDocument(format!("invalid utf-8: {e}")));
    }

    let label = declared_charset(raw)?;
    let encoding = resolve(label.as_deref())?;

    if encoding == UTF_8 {
        return std::str::from_utf8(raw)
            .map(Cow::Borrowed)
            .map_err(|e| FxError::MalformedDocument(format!("invalid utf-8: {e}")));
    }

    let (text, had_errors) = encoding.decode_without_bom_handling(raw);
    if had_errors {
        tracing::debug!(charset = encoding.name(), "body contained unmappable bytes");
    }
    Ok(text)
}
