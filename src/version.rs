//! Deployment version label and the page color scheme it selects.

use std::fmt;

use serde::Serialize;

use crate::config::DEFAULT_VERSION;

/// The label distinguishing the blue and green deployment variants.
///
/// The set of labels is open: anything is accepted, but only the exact value
/// `"blue"` selects the blue scheme. Empty input falls back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionLabel(String);

impl VersionLabel {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        if label.is_empty() {
            Self::default()
        } else {
            Self(label)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blue(&self) -> bool {
        self.0 == DEFAULT_VERSION
    }

    /// Upper-cased label as shown in the page heading.
    pub fn display_name(&self) -> String {
        self.0.to_uppercase()
    }

    pub fn gradient(&self) -> Gradient {
        if self.is_blue() {
            Gradient::Blue
        } else {
            Gradient::Green
        }
    }
}

impl Default for VersionLabel {
    fn default() -> Self {
        Self(DEFAULT_VERSION.to_string())
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Page background. Anything that is not blue renders green.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    Blue,
    Green,
}

impl Gradient {
    pub fn css(self) -> &'static str {
        match self {
            Gradient::Blue => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            Gradient::Green => "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        }
    }
}
