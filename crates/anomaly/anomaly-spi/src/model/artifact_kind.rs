//! Identifies one of the three artifacts loaded at startup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The artifacts an inference context is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Model,
    Scaler,
    Threshold,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [Self::Model, Self::Scaler, Self::Threshold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Scaler => "scaler",
            Self::Threshold => "threshold",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        for kind in ArtifactKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
