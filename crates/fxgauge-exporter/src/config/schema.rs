use std::collections::HashMap;

use serde::Deserialize;

/// On-disk mapping file.
///
/// ```yaml
/// value_mapping:
///   USD: "US Dollar"
///   EUR: "Euro"
/// ```
///
/// Unknown keys are ignored so the file can carry other sections.
#[derive(Debug, Default, Deserialize)]
pub struct MappingFile {
    #[serde(default)]
    pub value_mapping: Option<HashMap<String, String>>,
}

/// Currency code to display name. Built once at startup, read-only after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeNameMapping {
    names: HashMap<String, String>,
}

impl CodeNameMapping {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    /// Display name for `code`, or `""` when the code is not mapped.
    pub fn name_for(&self, code: &str) -> &str {
        self.names.get(code).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<MappingFile> for CodeNameMapping {
    fn from(f: MappingFile) -> Self {
        Self::new(f.value_mapping.unwrap_or_default())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CodeNameMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
