use std::fmt;

use serde::Serialize;

/// A markup document with the stylesheet and script embedded.
///
/// Only the inliner constructs one, so holding an `InlinedDocument` means the
/// text passed the zero-external-references check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InlinedDocument(String);

impl InlinedDocument {
    pub(crate) fn new(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for InlinedDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InlinedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
