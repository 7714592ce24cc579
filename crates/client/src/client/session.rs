//! Session API methods for [`MailClient`].

use crate::client::MailClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Session;

impl MailClient {
    /// Fetch the current session, if any.
    pub async fn get_session(&self) -> Result<Option<Session>> {
        endpoints::get_session(&self.http, &self.base_url, self.token()).await
    }

    /// Point the current session at another connection.
    pub async fn update_session(&self, connection_id: &str) -> Result<()> {
        endpoints::update_session(&self.http, &self.base_url, self.token(), connection_id).await
    }
}
