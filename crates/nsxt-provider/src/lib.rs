//! Schema-model adapter between provider attribute trees and NSX-T API objects.
//!
//! The provider's resource handlers receive configuration as a generic
//! attribute tree and talk to the manager through typed API objects. This
//! crate owns the translation between the two:
//!
//! - **[`schema`]**: Declarative attribute descriptions (`tag`,
//!   `switching_profile_id`, `address_binding`, resource references,
//!   `subnet`, `admin_state`, ...) with the validation rules the host engine
//!   applies before any conversion runs.
//!
//! - **[`ResourceData`]**: The attribute tree of one resource. Decoding an
//!   attribute into its typed record is the single boundary where shape
//!   errors surface; everything past it is a total conversion.
//!
//! - **[`convert`]**: Read converters (`*_from_schema`) producing API
//!   objects, and write converters (`*_to_schema`) returning the value to
//!   persist as state.
//!
//! - **[`api`]**: The two calls that reach the manager: switching profile
//!   filtering (drops system-owned profiles) and the node version probe,
//!   each with an explicit failure policy.

pub mod api;
pub mod convert;
pub mod data;
pub mod error;
pub mod logging;
pub mod model;
pub mod schema;

// ── Primary re-exports ──────────────────────────────────────────────
pub use api::{
    AdapterPolicy, DEFAULT_NSX_VERSION, ManagerApi, ProfileLookupFailure, VersionProbeFailure,
    nsx_version, nsx_version_with, switching_profile_ids_to_schema,
};
pub use data::ResourceData;
pub use error::ProviderError;
pub use model::{
    AddressBindingAttr, AdminState, IpSubnetAttr, ResourceReferenceAttr, SwitchingProfileIdAttr,
    TagAttr,
};
pub use schema::{Diagnostic, Elem, Resource, Schema, ValueType, Validator};
