// ── Attribute-side records ──
//
// One typed record per nested block of the attribute tree. Missing keys
// decode to the host engine's zero values (empty string, 0, false) because
// that is what it reports for unset optional attributes.

pub mod admin_state;
pub mod reference;
pub mod routing;
pub mod switching;
pub mod tag;

pub use admin_state::AdminState;
pub use reference::ResourceReferenceAttr;
pub use routing::IpSubnetAttr;
pub use switching::{AddressBindingAttr, SwitchingProfileIdAttr};
pub use tag::TagAttr;
