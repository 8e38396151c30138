//! Rate table document (`ValCurs`).
//!
//! Shape of the upstream body:
//!
//! ```xml
//! <?xml version="1.0" encoding="windows-1251"?>
//! <ValCurs Date="18.10.2026" name="Foreign Currency Market">
//!   <Valute ID="R01235">
//!     <NumCode>840</NumCode>
//!     <CharCode>USD</CharCode>
//!     <Nominal>1</Nominal>
//!     <Name>Доллар США</Name>
//!     <Value>90,0000</Value>
//!   </Valute>
//! </ValCurs>
//! ```
//!
//! Only `CharCode`, `Nominal` and `Value` are kept. A missing child becomes an
//! empty string and is refused later, per record, by
//! [`RateRecord::per_unit_rate`].

use serde::Deserialize;

use crate::error::{FxError, Result};
use crate::rates::charset::decode_body;
use crate::rates::record::RateRecord;

#[derive(Debug, Deserialize)]
struct ValCurs {
    #[serde(rename = "@Date", default)]
    date: Option<String>,
    #[serde(rename = "Valute", default)]
    valutes: Vec<Valute>,
}

#[derive(Debug, Deserialize)]
struct Valute {
    #[serde(rename = "CharCode", default)]
    char_code: String,
    #[serde(rename = "Nominal", default)]
    nominal: String,
    #[serde(rename = "Value", default)]
    value: String,
}

impl From<Valute> for RateRecord {
    fn from(v: Valute) -> Self {
        RateRecord::new(v.char_code.trim(), v.nominal, v.value)
    }
}

/// Parsed rate table, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateDocument {
    /// `Date` attribute of the root element, as sent.
    pub date: Option<String>,
    pub records: Vec<RateRecord>,
}

impl RateDocument {
    /// Decode a raw upstream body (charset from the XML declaration).
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let text = decode_body(raw)?;
        Self::from_xml_str(&text)
    }

    /// Parse already-decoded XML text.
    pub fn from_xml_str(s: &str) -> Result<Self> {
        let doc: ValCurs = quick_xml::de::from_str(s)
            .map_err(|e| FxError::MalformedDocument(e.to_string()))?;

        Ok(Self {
            date: doc.date,
            records: doc.valutes.into_iter().map(RateRecord::from).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
