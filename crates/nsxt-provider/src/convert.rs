// ── Attribute ↔ API object conversions ──
//
// Bridges the typed attribute records in `crate::model` and the manager API
// objects in `nsxt_api::models`. Read converters decode an attribute from
// `ResourceData` and map it field by field; write converters return the
// records to store back under the attribute name. The `From` impls are
// total: empty strings and zero VLANs become `None` on the API side and
// come back as the host engine's zero values.

use serde_json::Value;

use nsxt_api::models::{
    IpSubnet, PacketAddressClassifier, ResourceReference, ServiceBinding,
    SwitchingProfileTypeIdEntry, Tag,
};

use crate::data::ResourceData;
use crate::error::ProviderError;
use crate::model::{
    AddressBindingAttr, AdminState, IpSubnetAttr, ResourceReferenceAttr, SwitchingProfileIdAttr,
    TagAttr,
};
use crate::schema::{ADDRESS_BINDINGS, ADMIN_STATE, SUBNETS, SWITCHING_PROFILE_IDS, TAGS};

// ── Helpers ────────────────────────────────────────────────────────

/// Keep the non-empty strings of a generic list, in order.
pub fn interface_to_string_list(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn string_list_to_interface(list: &[String]) -> Vec<Value> {
    list.iter().cloned().map(Value::String).collect()
}

/// Decode a set-of-strings attribute, dropping empty entries.
pub fn string_list_from_schema_set(
    d: &ResourceData,
    attr: &str,
) -> Result<Vec<String>, ProviderError> {
    let values: Vec<Value> = d.get_set(attr)?;
    Ok(interface_to_string_list(&values))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Reference carrying only a target type and id.
pub fn make_resource_reference(resource_type: &str, resource_id: &str) -> ResourceReference {
    ResourceReference::new(resource_type, resource_id)
}

// ── Tag ────────────────────────────────────────────────────────────

impl From<TagAttr> for Tag {
    fn from(t: TagAttr) -> Self {
        Tag {
            scope: t.scope,
            tag: t.tag,
        }
    }
}

impl From<&Tag> for TagAttr {
    fn from(t: &Tag) -> Self {
        TagAttr {
            scope: t.scope.clone(),
            tag: t.tag.clone(),
        }
    }
}

pub fn tags_from_schema(d: &ResourceData) -> Result<Vec<Tag>, ProviderError> {
    let tags: Vec<TagAttr> = d.get_set(TAGS)?;
    Ok(tags.into_iter().map(Tag::from).collect())
}

pub fn tags_to_schema(tags: &[Tag]) -> Vec<TagAttr> {
    tags.iter().map(TagAttr::from).collect()
}

// ── Switching profile ──────────────────────────────────────────────

impl From<SwitchingProfileIdAttr> for SwitchingProfileTypeIdEntry {
    fn from(p: SwitchingProfileIdAttr) -> Self {
        SwitchingProfileTypeIdEntry {
            key: p.key,
            value: p.value,
        }
    }
}

impl From<&SwitchingProfileTypeIdEntry> for SwitchingProfileIdAttr {
    fn from(p: &SwitchingProfileTypeIdEntry) -> Self {
        SwitchingProfileIdAttr {
            key: p.key.clone(),
            value: p.value.clone(),
        }
    }
}

pub fn switching_profile_ids_from_schema(
    d: &ResourceData,
) -> Result<Vec<SwitchingProfileTypeIdEntry>, ProviderError> {
    let profiles: Vec<SwitchingProfileIdAttr> = d.get_set(SWITCHING_PROFILE_IDS)?;
    Ok(profiles
        .into_iter()
        .map(SwitchingProfileTypeIdEntry::from)
        .collect())
}

// ── Address binding ────────────────────────────────────────────────

impl From<AddressBindingAttr> for PacketAddressClassifier {
    fn from(b: AddressBindingAttr) -> Self {
        PacketAddressClassifier {
            ip_address: non_empty(b.ip_address),
            mac_address: non_empty(b.mac_address),
            vlan: (b.vlan != 0).then_some(b.vlan),
        }
    }
}

impl From<&PacketAddressClassifier> for AddressBindingAttr {
    fn from(b: &PacketAddressClassifier) -> Self {
        AddressBindingAttr {
            ip_address: b.ip_address.clone().unwrap_or_default(),
            mac_address: b.mac_address.clone().unwrap_or_default(),
            vlan: b.vlan.unwrap_or_default(),
        }
    }
}

pub fn address_bindings_from_schema(
    d: &ResourceData,
) -> Result<Vec<PacketAddressClassifier>, ProviderError> {
    let bindings: Vec<AddressBindingAttr> = d.get_set(ADDRESS_BINDINGS)?;
    Ok(bindings
        .into_iter()
        .map(PacketAddressClassifier::from)
        .collect())
}

pub fn address_bindings_to_schema(bindings: &[PacketAddressClassifier]) -> Vec<AddressBindingAttr> {
    bindings.iter().map(AddressBindingAttr::from).collect()
}

// ── Resource reference ─────────────────────────────────────────────

impl From<ResourceReferenceAttr> for ResourceReference {
    fn from(r: ResourceReferenceAttr) -> Self {
        ResourceReference {
            is_valid: r.is_valid,
            target_display_name: non_empty(r.target_display_name),
            target_id: non_empty(r.target_id),
            target_type: non_empty(r.target_type),
        }
    }
}

impl From<&ResourceReference> for ResourceReferenceAttr {
    fn from(r: &ResourceReference) -> Self {
        ResourceReferenceAttr {
            is_valid: r.is_valid,
            target_display_name: r.target_display_name.clone().unwrap_or_default(),
            target_id: r.target_id.clone().unwrap_or_default(),
            target_type: r.target_type.clone().unwrap_or_default(),
        }
    }
}

/// Map decoded reference blocks to API references.
pub fn resource_references(references: Vec<ResourceReferenceAttr>) -> Vec<ResourceReference> {
    references.into_iter().map(ResourceReference::from).collect()
}

/// Read a reference attribute declared as an ordered list.
pub fn resource_references_from_schema(
    d: &ResourceData,
    attr: &str,
) -> Result<Vec<ResourceReference>, ProviderError> {
    Ok(resource_references(d.get_list(attr)?))
}

/// Read a reference attribute declared as a set.
pub fn resource_references_from_schema_set(
    d: &ResourceData,
    attr: &str,
) -> Result<Vec<ResourceReference>, ProviderError> {
    Ok(resource_references(d.get_set(attr)?))
}

pub fn resource_references_to_schema(
    references: &[ResourceReference],
) -> Vec<ResourceReferenceAttr> {
    references.iter().map(ResourceReferenceAttr::from).collect()
}

// ── Service binding ────────────────────────────────────────────────

impl From<ResourceReferenceAttr> for ServiceBinding {
    fn from(r: ResourceReferenceAttr) -> Self {
        ServiceBinding {
            service_id: r.into(),
        }
    }
}

impl From<&ServiceBinding> for ResourceReferenceAttr {
    fn from(b: &ServiceBinding) -> Self {
        ResourceReferenceAttr::from(&b.service_id)
    }
}

pub fn service_bindings_from_schema(
    d: &ResourceData,
    attr: &str,
) -> Result<Vec<ServiceBinding>, ProviderError> {
    let references: Vec<ResourceReferenceAttr> = d.get_list(attr)?;
    Ok(references.into_iter().map(ServiceBinding::from).collect())
}

pub fn service_bindings_to_schema(bindings: &[ServiceBinding]) -> Vec<ResourceReferenceAttr> {
    bindings.iter().map(ResourceReferenceAttr::from).collect()
}

// ── IP subnet ──────────────────────────────────────────────────────

impl From<IpSubnetAttr> for IpSubnet {
    fn from(s: IpSubnetAttr) -> Self {
        IpSubnet {
            ip_addresses: s.ip_addresses,
            prefix_length: s.prefix_length,
        }
    }
}

impl From<&IpSubnet> for IpSubnetAttr {
    fn from(s: &IpSubnet) -> Self {
        IpSubnetAttr {
            ip_addresses: s.ip_addresses.clone(),
            prefix_length: s.prefix_length,
        }
    }
}

pub fn ip_subnets_from_schema(d: &ResourceData) -> Result<Vec<IpSubnet>, ProviderError> {
    let subnets: Vec<IpSubnetAttr> = d.get_list(SUBNETS)?;
    Ok(subnets.into_iter().map(IpSubnet::from).collect())
}

pub fn ip_subnets_to_schema(subnets: &[IpSubnet]) -> Vec<IpSubnetAttr> {
    subnets.iter().map(IpSubnetAttr::from).collect()
}

// ── Admin state ────────────────────────────────────────────────────

/// Read `admin_state`, falling back to the schema default when unset.
pub fn admin_state_from_schema(d: &ResourceData) -> Result<AdminState, ProviderError> {
    Ok(d.get(ADMIN_STATE)?.unwrap_or_default())
}
