use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// how footprint features are matched to compliance report rows
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JoinKey {
    /// `Site_Index` is the feature's position in the footprint collection
    #[default]
    Position,
    /// `Site_Key` is the feature's content-derived site key
    SiteKey,
}

impl Display for JoinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinKey::Position => write!(f, "position"),
            JoinKey::SiteKey => write!(f, "site-key"),
        }
    }
}
