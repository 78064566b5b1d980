pub mod backend;
pub mod error;
pub mod site;
pub mod wire;

pub use backend::{ClientConfig, HttpBackend, SiteBackend};
pub use error::ClientError;
pub use site::{LngLat, Site, SiteId};
