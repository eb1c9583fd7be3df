use serde::{Deserialize, Serialize};
use strum::VariantNames;

/// Desired administrative state of a switch, port or router.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AdminState {
    #[default]
    Up,
    Down,
}

impl AdminState {
    /// Accepted attribute values, in declaration order.
    pub fn values() -> &'static [&'static str] {
        Self::VARIANTS
    }
}
