//! Connection API methods for [`MailClient`].

use crate::client::MailClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Connection;

impl MailClient {
    /// List linked mail connections.
    pub async fn list_connections(&self) -> Result<Vec<Connection>> {
        endpoints::list_connections(&self.http, &self.base_url, self.token()).await
    }

    /// Make a connection the server-side default.
    pub async fn switch_connection(&self, connection_id: &str) -> Result<()> {
        endpoints::switch_connection(&self.http, &self.base_url, self.token(), connection_id).await
    }
}
