use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of topics the generator knows how to produce.
///
/// Request strings are matched after trimming and lowercasing. Anything that
/// does not match falls back to [`Topic::Algebra`], which is also the
/// `Default` variant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Topic {
    #[default]
    Algebra,
    Geometry,
}

impl Topic {
    /// Strict lookup, `None` for unrecognized labels.
    pub fn recognize(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "algebra" => Some(Topic::Algebra),
            "geometry" => Some(Topic::Geometry),
            _ => None,
        }
    }

    /// Lookup with fallback to the default topic.
    pub fn from_label(label: &str) -> Self {
        Self::recognize(label).unwrap_or_else(|| {
            tracing::debug!(topic = %label, fallback = %Topic::default(), "Unrecognized topic");
            Topic::default()
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Topic::Algebra => "Algebra",
            Topic::Geometry => "Geometry",
        }
    }

    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            Topic::Algebra => &["linear-equations"],
            Topic::Geometry => &["area"],
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
