//! Serde data structures for the prompts file.
//!
//! [`PromptsFile`] is the typed shape of the on-disk YAML document: a
//! mapping with a `prompts` entry from prompt names to template-source
//! strings. Unknown top-level keys are ignored so prompts files can
//! carry adjacent configuration for other tools. A `prompts` value of
//! the wrong shape fails deserialization outright.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PromptsFile {
    /// `None` when the document has no top-level `prompts` key at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts: Option<BTreeMap<String, String>>,
}

impl PromptsFile {
    /// Number of prompt entries (zero when the `prompts` key is absent).
    #[must_use]
    pub fn count(&self) -> usize {
        self.prompts.as_ref().map_or(0, BTreeMap::len)
    }

    /// Prompt names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.prompts
            .as_ref()
            .map_or_else(Vec::new, |prompts| prompts.keys().cloned().collect())
    }
}
