// ── Shared attribute definitions ──
//
// Schemas for the attributes most NSX resources share. Each function is
// pure; resources embed the result under the attribute name constants
// below (reference and service-binding attributes pick their own name).

use super::{Resource, Schema, ValueType, Validator};
use crate::model::AdminState;

// ── Attribute names ─────────────────────────────────────────────────

pub const REVISION: &str = "revision";
pub const SYSTEM_OWNED: &str = "system_owned";
pub const TAGS: &str = "tag";
pub const SWITCHING_PROFILE_IDS: &str = "switching_profile_id";
pub const ADDRESS_BINDINGS: &str = "address_binding";
pub const SUBNETS: &str = "subnet";
pub const ADMIN_STATE: &str = "admin_state";

// ── Metadata ────────────────────────────────────────────────────────

pub fn revision_schema() -> Schema {
    Schema::new(ValueType::Int)
        .description(
            "The _revision property describes the current revision of the resource. \
             To prevent clients from overwriting each other's changes, PUT operations \
             must include the current _revision of the resource, which clients should \
             obtain by issuing a GET operation. If the _revision provided in a PUT \
             request is missing or stale, the operation will be rejected",
        )
        .computed()
}

pub fn system_owned_schema() -> Schema {
    Schema::new(ValueType::Bool)
        .description("Indicates system owned resource")
        .computed()
}

// ── Tags ────────────────────────────────────────────────────────────

pub fn tags_schema() -> Schema {
    Schema::new(ValueType::Set)
        .description("Set of opaque identifiers meaningful to the API user")
        .optional()
        .elem_resource(
            Resource::new()
                .with("scope", Schema::new(ValueType::String).required())
                .with("tag", Schema::new(ValueType::String).required()),
        )
}

// ── Switching profiles ──────────────────────────────────────────────

pub fn switching_profile_ids_schema() -> Schema {
    Schema::new(ValueType::Set)
        .description(
            "List of IDs of switching profiles (of various types) to be associated with \
             this switch. Default switching profiles will be used if not specified",
        )
        .optional()
        .computed()
        .elem_resource(
            Resource::new()
                .with(
                    "key",
                    Schema::new(ValueType::String)
                        .description("The resource type of this profile")
                        .required(),
                )
                .with(
                    "value",
                    Schema::new(ValueType::String)
                        .description("The ID of this profile")
                        .required(),
                ),
        )
}

// ── Address bindings ────────────────────────────────────────────────

pub fn address_bindings_schema() -> Schema {
    Schema::new(ValueType::Set)
        .description("Address bindings for the Logical switch")
        .optional()
        .elem_resource(
            Resource::new()
                .with(
                    "ip_address",
                    Schema::new(ValueType::String)
                        .description("A single IP address or a subnet cidr")
                        .optional()
                        .validator(Validator::SingleIp),
                )
                .with(
                    "mac_address",
                    Schema::new(ValueType::String)
                        .description("A single MAC address")
                        .optional(),
                )
                .with(
                    "vlan",
                    Schema::new(ValueType::Int)
                        .description("A single vlan tag value")
                        .optional(),
                ),
        )
}

// ── Resource references ─────────────────────────────────────────────

/// Ordered list of resource references.
pub fn resource_references_schema(
    required: bool,
    computed: bool,
    valid_target_types: &[&str],
    description: &str,
) -> Schema {
    resource_references_schema_by_type(required, computed, valid_target_types, true, description)
}

/// Unordered set of resource references.
pub fn resource_references_set_schema(
    required: bool,
    computed: bool,
    valid_target_types: &[&str],
    description: &str,
) -> Schema {
    resource_references_schema_by_type(required, computed, valid_target_types, false, description)
}

pub fn resource_references_schema_by_type(
    required: bool,
    computed: bool,
    valid_target_types: &[&str],
    is_list: bool,
    description: &str,
) -> Schema {
    let value_type = if is_list {
        ValueType::List
    } else {
        ValueType::Set
    };

    Schema::new(value_type)
        .required_if(required)
        .computed_if(computed)
        .description(description)
        .elem_resource(
            Resource::new()
                .with(
                    "is_valid",
                    Schema::new(ValueType::Bool)
                        .description(
                            "A boolean flag which will be set to false if the referenced \
                             NSX resource has been deleted",
                        )
                        .computed(),
                )
                .with(
                    "target_display_name",
                    Schema::new(ValueType::String)
                        .description("Display name of the NSX resource")
                        .computed(),
                )
                .with(
                    "target_id",
                    Schema::new(ValueType::String)
                        .description("Identifier of the NSX resource")
                        .optional(),
                )
                .with(
                    "target_type",
                    Schema::new(ValueType::String)
                        .description("Type of the NSX resource")
                        .optional()
                        .validator(Validator::string_in_slice(
                            valid_target_types.iter().copied(),
                            false,
                        )),
                ),
        )
}

// ── Subnets ─────────────────────────────────────────────────────────

pub fn ip_subnets_schema(required: bool, computed: bool) -> Schema {
    Schema::new(ValueType::List)
        .description("Logical router port subnets")
        .required_if(required)
        .computed_if(computed)
        .elem_resource(
            Resource::new()
                .with(
                    "ip_addresses",
                    Schema::new(ValueType::List)
                        .description("IPv4 Addresses")
                        .optional()
                        .elem_schema(
                            Schema::new(ValueType::String).validator(Validator::SingleIp),
                        ),
                )
                .with(
                    "prefix_length",
                    Schema::new(ValueType::Int)
                        .description("Subnet Prefix Length")
                        .optional()
                        .validator(Validator::int_between(0, 32)),
                ),
        )
}

// ── Admin state ─────────────────────────────────────────────────────

pub fn admin_state_schema() -> Schema {
    Schema::new(ValueType::String)
        .optional()
        .description("Represents Desired state of the object")
        .default_value(AdminState::default().to_string())
        .validator(Validator::string_in_slice(AdminState::values().iter().copied(), false))
}
