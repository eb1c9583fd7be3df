// ── Manager passthrough calls ──
//
// The two adapter operations that reach the NSX manager. Both absorb
// failures by default; the `AdapterPolicy` names what happens instead so
// the behavior is configurable and visible in tests.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use nsxt_api::NsxClient;
use nsxt_api::models::{BaseSwitchingProfile, NodeProperties, SwitchingProfileTypeIdEntry};

use crate::error::ProviderError;
use crate::model::SwitchingProfileIdAttr;

/// Version reported when the manager cannot tell us its own.
pub const DEFAULT_NSX_VERSION: &str = "1.0.0";

/// The manager calls the adapter depends on.
///
/// Implemented by [`NsxClient`]; tests substitute in-memory fakes.
pub trait ManagerApi {
    fn get_switching_profile(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<BaseSwitchingProfile, nsxt_api::Error>> + Send;

    fn read_node_properties(
        &self,
    ) -> impl Future<Output = Result<NodeProperties, nsxt_api::Error>> + Send;
}

impl ManagerApi for NsxClient {
    fn get_switching_profile(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<BaseSwitchingProfile, nsxt_api::Error>> + Send {
        NsxClient::get_switching_profile(self, id)
    }

    fn read_node_properties(
        &self,
    ) -> impl Future<Output = Result<NodeProperties, nsxt_api::Error>> + Send {
        NsxClient::read_node_properties(self)
    }
}

// ── Failure policies ────────────────────────────────────────────────

/// What to do with a profile entry whose lookup failed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProfileLookupFailure {
    /// Keep the entry, as if the profile were not system-owned.
    #[default]
    TreatAsUserOwned,
    /// Drop the entry from state.
    Skip,
    /// Fail the whole conversion.
    Propagate,
}

/// What the version probe returns when node properties are unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionProbeFailure {
    /// Report this version instead.
    Fallback(String),
    Propagate,
}

impl Default for VersionProbeFailure {
    fn default() -> Self {
        Self::Fallback(DEFAULT_NSX_VERSION.to_owned())
    }
}

/// Failure handling for both manager calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterPolicy {
    pub on_profile_lookup_failure: ProfileLookupFailure,
    pub on_version_probe_failure: VersionProbeFailure,
}

// ── Switching profiles ──────────────────────────────────────────────

/// Build the `switching_profile_id` state, leaving out system-owned profiles.
///
/// Issues one lookup per entry, sequentially.
pub async fn switching_profile_ids_to_schema<A>(
    api: &A,
    profiles: &[SwitchingProfileTypeIdEntry],
    on_failure: ProfileLookupFailure,
) -> Result<Vec<SwitchingProfileIdAttr>, ProviderError>
where
    A: ManagerApi + Sync,
{
    let mut kept = Vec::with_capacity(profiles.len());

    for entry in profiles {
        match api.get_switching_profile(&entry.value).await {
            Ok(profile) if profile.system_owned => {
                trace!(profile_id = %entry.value, key = %entry.key, "omitting system-owned profile");
            }
            Ok(_) => kept.push(SwitchingProfileIdAttr::from(entry)),
            Err(err) => match on_failure {
                ProfileLookupFailure::TreatAsUserOwned => {
                    warn!(profile_id = %entry.value, error = %err, "profile lookup failed, keeping entry");
                    kept.push(SwitchingProfileIdAttr::from(entry));
                }
                ProfileLookupFailure::Skip => {
                    warn!(profile_id = %entry.value, error = %err, "profile lookup failed, dropping entry");
                }
                ProfileLookupFailure::Propagate => {
                    return Err(ProviderError::ProfileLookup {
                        profile_id: entry.value.clone(),
                        source: err,
                    });
                }
            },
        }
    }

    debug!(total = profiles.len(), kept = kept.len(), "filtered switching profiles");
    Ok(kept)
}

// ── Version probe ───────────────────────────────────────────────────

/// Manager node version, or [`DEFAULT_NSX_VERSION`] when it cannot be read.
pub async fn nsx_version<A>(api: &A) -> String
where
    A: ManagerApi + Sync,
{
    nsx_version_with(api, &VersionProbeFailure::default())
        .await
        .unwrap_or_else(|_| DEFAULT_NSX_VERSION.to_owned())
}

/// Manager node version with an explicit failure policy.
pub async fn nsx_version_with<A>(
    api: &A,
    on_failure: &VersionProbeFailure,
) -> Result<String, ProviderError>
where
    A: ManagerApi + Sync,
{
    match api.read_node_properties().await {
        Ok(node) => {
            debug!(version = %node.node_version, "read manager node version");
            Ok(node.node_version)
        }
        Err(err) => match on_failure {
            VersionProbeFailure::Fallback(version) => {
                warn!(
                    error = %err,
                    not_found = err.is_not_found(),
                    fallback = %version,
                    "node properties not found"
                );
                Ok(version.clone())
            }
            VersionProbeFailure::Propagate => Err(ProviderError::VersionProbe(err)),
        },
    }
}
