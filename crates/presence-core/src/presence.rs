//! Presence classification.
//!
//! A presence level is the market-entry mode recorded for a state or city:
//! selling direct, through a distributor, through an importer, or not at
//! all. Levels are totally ordered so that the aggregator can resolve
//! conflicting records with a single comparison.

use serde::{Deserialize, Serialize};

/// Market presence level, ordered from weakest to strongest.
///
/// The derived `Ord` is the priority used when several records disagree
/// about a state: `None < Importer < Distributor < Direct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    None,
    Importer,
    Distributor,
    Direct,
}

impl Presence {
    /// Parse a raw CSV cell. Total: anything unrecognized (including an
    /// empty cell) is `Presence::None`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "direct" => Presence::Direct,
            "distributor" => Presence::Distributor,
            "importer" => Presence::Importer,
            _ => Presence::None,
        }
    }

    /// Display color, hex-exact with the legacy map.
    pub fn color(self) -> &'static str {
        match self {
            Presence::Direct => "#3CB371",      // Green
            Presence::Distributor => "#FFA500", // Orange
            Presence::Importer => "#4682B4",    // Blue
            Presence::None => "#dddddd",        // Light Grey
        }
    }

    /// Lowercase label used in popups.
    pub fn label(self) -> &'static str {
        match self {
            Presence::Direct => "direct",
            Presence::Distributor => "distributor",
            Presence::Importer => "importer",
            Presence::None => "none",
        }
    }
}

impl Default for Presence {
    fn default() -> Self {
        Presence::None
    }
}
