// nsxt-api: Async Rust client for the NSX-T manager API

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod node;
pub mod switching;
pub mod transport;

pub use auth::BasicAuth;
pub use client::NsxClient;
pub use error::Error;
pub use models::{
    BaseSwitchingProfile, IpSubnet, NodeProperties, PacketAddressClassifier, ResourceReference,
    ServiceBinding, SwitchingProfileTypeIdEntry, Tag,
};
pub use transport::{TlsMode, TransportConfig};
