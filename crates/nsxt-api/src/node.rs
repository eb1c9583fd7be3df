// Node administration endpoints

use tracing::debug;

use crate::client::NsxClient;
use crate::error::Error;
use crate::models::NodeProperties;

impl NsxClient {
    /// Read manager node properties (version, hostname, ...).
    ///
    /// `GET /api/v1/node`
    pub async fn read_node_properties(&self) -> Result<NodeProperties, Error> {
        debug!("reading node properties");
        self.get("node").await
    }
}
