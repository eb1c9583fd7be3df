// ── Logical switching blocks ──

use serde::{Deserialize, Serialize};

/// One element of the `switching_profile_id` set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchingProfileIdAttr {
    /// Profile resource type.
    pub key: String,
    /// Profile id.
    pub value: String,
}

/// One element of the `address_binding` set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressBindingAttr {
    pub ip_address: String,
    pub mac_address: String,
    /// 0 when unset.
    pub vlan: i64,
}
