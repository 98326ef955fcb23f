//! MarketRegime — coarse classification of current market behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Market regime used to gate trading rules.
///
/// `None` is an explicit "not yet determined" variant, not a default derived
/// from enum ordering: it is returned while the classifier's inputs are still
/// in warm-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketRegime {
    Bull,
    Bear,
    Sideways,
    Volatile,
    None,
}

impl MarketRegime {
    /// Reduced mapping: the noise gate alone distinguishes Volatile from None.
    pub fn from_noise(is_noise: bool) -> Self {
        if is_noise {
            Self::Volatile
        } else {
            Self::None
        }
    }

    pub fn is_determined(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for MarketRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Bull => "bull",
            Self::Bear => "bear",
            Self::Sideways => "sideways",
            Self::Volatile => "volatile",
            Self::None => "none",
        };
        f.write_str(s)
    }
}
