// Manager API object models
//
// Request/response shapes for the NSX-T manager `/api/v1` endpoints used by
// the provider. Field names follow the wire format. Optional strings are
// `Option` and skipped when absent so PUT bodies stay minimal.

use serde::{Deserialize, Serialize};

// ── Common ───────────────────────────────────────────────────────────

/// Opaque `{scope, tag}` identifier attached to most manager objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub tag: String,
}

/// Typed pointer from one manager object to another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceReference {
    /// Set to false by the manager once the referenced object is deleted.
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
}

impl ResourceReference {
    /// Reference carrying only a target type and id, as sent in requests.
    pub fn new(target_type: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            target_type: Some(target_type.into()),
            target_id: Some(target_id.into()),
            ..Self::default()
        }
    }
}

// ── Logical switching ────────────────────────────────────────────────

/// Association of a switching profile (by type) with a switch or port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwitchingProfileTypeIdEntry {
    /// Profile resource type, e.g. `QosSwitchingProfile`.
    pub key: String,
    /// Profile id.
    pub value: String,
}

/// Switching profile fields shared by every profile type.
///
/// `GET /api/v1/switching-profiles/{id}` returns a type-specific body; the
/// provider only needs the common part, everything else lands in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseSwitchingProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub system_owned: bool,
    #[serde(default, rename = "_revision")]
    pub revision: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Address binding (IP/MAC/VLAN classifier) of a logical port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketAddressClassifier {
    /// A single IP address or a subnet CIDR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan: Option<i64>,
}

/// Binding of a logical port to a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBinding {
    pub service_id: ResourceReference,
}

// ── Routing ──────────────────────────────────────────────────────────

/// Subnet of a logical router port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpSubnet {
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    pub prefix_length: i64,
}

// ── Node ─────────────────────────────────────────────────────────────

/// Manager node properties from `GET /api/v1/node`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeProperties {
    #[serde(default)]
    pub node_version: String,
    #[serde(default)]
    pub product_version: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub node_uuid: Option<String>,
    #[serde(default)]
    pub kernel_version: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn switching_profile_keeps_unknown_fields() {
        let profile: BaseSwitchingProfile = serde_json::from_value(json!({
            "id": "p1",
            "resource_type": "QosSwitchingProfile",
            "system_owned": true,
            "_revision": 3,
            "class_of_service": 0
        }))
        .unwrap();

        assert!(profile.system_owned);
        assert_eq!(profile.revision, Some(3));
        assert_eq!(profile.extra.get("class_of_service"), Some(&json!(0)));
    }

    #[test]
    fn empty_reference_fields_are_omitted() {
        let body = serde_json::to_value(ResourceReference::new("LogicalSwitch", "ls-1")).unwrap();
        assert_eq!(
            body,
            json!({"is_valid": false, "target_id": "ls-1", "target_type": "LogicalSwitch"})
        );
    }

    #[test]
    fn address_binding_fields_are_optional() {
        let binding: PacketAddressClassifier =
            serde_json::from_value(json!({"mac_address": "00:50:56:aa:bb:cc"})).unwrap();
        assert_eq!(binding.ip_address, None);
        assert_eq!(binding.vlan, None);
        assert_eq!(binding.mac_address.as_deref(), Some("00:50:56:aa:bb:cc"));
    }
}
