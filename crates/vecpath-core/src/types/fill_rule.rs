use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fill rule used by consumers that paint a path's interior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    /// Even-odd (alternate) rule
    #[default]
    Alternate,
    /// Non-zero winding rule
    Winding,
}

impl fmt::Display for FillRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alternate => write!(f, "alternate"),
            Self::Winding => write!(f, "winding"),
        }
    }
}

impl FromStr for FillRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alternate" | "evenodd" | "even_odd" | "even-odd" => Ok(Self::Alternate),
            "winding" | "nonzero" | "non_zero" | "non-zero" => Ok(Self::Winding),
            _ => Err(format!("Unknown fill rule: {}", s)),
        }
    }
}

impl From<FillRule> for lyon::path::FillRule {
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::Alternate => lyon::path::FillRule::EvenOdd,
            FillRule::Winding => lyon::path::FillRule::NonZero,
        }
    }
}
