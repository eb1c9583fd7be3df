// Logical switching endpoints

use tracing::debug;

use crate::client::NsxClient;
use crate::error::Error;
use crate::models::BaseSwitchingProfile;

impl NsxClient {
    /// Fetch a switching profile by id.
    ///
    /// `GET /api/v1/switching-profiles/{id}`
    pub async fn get_switching_profile(&self, id: &str) -> Result<BaseSwitchingProfile, Error> {
        debug!(profile_id = id, "fetching switching profile");
        self.get_url(self.member_url("switching-profiles", id)?).await
    }
}
