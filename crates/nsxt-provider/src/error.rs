// ── Adapter error types ──
//
// Errors surfaced by the schema adapter. Converters past the decode
// boundary never fail; what remains is a shape mismatch in the attribute
// tree or a manager call whose failure policy says to propagate.

use thiserror::Error;

/// Unified error type for the adapter crate.
#[derive(Debug, Error)]
pub enum ProviderError {
    // ── Attribute tree ───────────────────────────────────────────────
    /// An attribute did not match the shape its schema declares.
    #[error("Attribute '{attribute}' does not match its schema: {message}")]
    Decode { attribute: String, message: String },

    /// The resource data root was not an object.
    #[error("Resource data must be an object, got {found}")]
    InvalidRoot { found: String },

    /// A value could not be encoded into the attribute tree.
    #[error("Cannot store attribute '{attribute}': {message}")]
    Encode { attribute: String, message: String },

    // ── Manager calls ────────────────────────────────────────────────
    #[error("Switching profile lookup failed for '{profile_id}': {source}")]
    ProfileLookup {
        profile_id: String,
        #[source]
        source: nsxt_api::Error,
    },

    #[error("Node version probe failed: {0}")]
    VersionProbe(#[source] nsxt_api::Error),

    #[error("API error: {0}")]
    Api(#[from] nsxt_api::Error),
}

impl ProviderError {
    pub(crate) fn decode(attribute: &str, err: &serde_json::Error) -> Self {
        Self::Decode {
            attribute: attribute.to_owned(),
            message: err.to_string(),
        }
    }

    /// Returns `true` if the underlying manager call answered 404.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::ProfileLookup { source, .. } | Self::VersionProbe(source) | Self::Api(source) => {
                source.is_not_found()
            }
            _ => false,
        }
    }
}
