use crate::messages;
use crate::ports::{AlertKind, PagePort};
use reefscout_client::{ClientError, SiteBackend, SiteId};
use tracing::{info, warn};

/// Add/remove buttons on site pages and the bucket list page.
pub struct BucketList<B, P> {
    backend: B,
    page: P,
}

impl<B: SiteBackend, P: PagePort> BucketList<B, P> {
    pub fn new(backend: B, page: P) -> Self {
        Self { backend, page }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub async fn add(&mut self, id: &SiteId) -> Result<String, ClientError> {
        match self.backend.bucket_list_add(id).await {
            Ok(message) => {
                info!("Added site {} to bucket list", id);
                self.page.show_alert(AlertKind::Info, &message);
                Ok(message)
            }
            Err(e) => {
                warn!("Adding site {} failed: {}", id, e);
                self.page.show_alert(AlertKind::Error, messages::BUCKET_LIST_FAILED);
                Err(e)
            }
        }
    }

    /// The list entry is only dropped once the server confirms.
    pub async fn remove(&mut self, id: &SiteId) -> Result<String, ClientError> {
        match self.backend.bucket_list_remove(id).await {
            Ok(message) => {
                info!("Removed site {} from bucket list", id);
                self.page.remove_entry(id);
                self.page.show_alert(AlertKind::Info, &message);
                Ok(message)
            }
            Err(e) => {
                warn!("Removing site {} failed: {}", id, e);
                self.page.show_alert(AlertKind::Error, messages::BUCKET_LIST_FAILED);
                Err(e)
            }
        }
    }
}
