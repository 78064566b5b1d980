pub mod bucket;
pub mod controller;
pub mod detail;
pub mod error;
pub mod gesture;
pub mod messages;
pub mod model;
pub mod ports;
pub mod view;

pub use bucket::BucketList;
pub use controller::{SearchController, SearchOutcome};
pub use detail::SiteDetail;
pub use error::{SearchError, ValidationError};
pub use gesture::{HOLD_DURATION, PinGesture, PressId};
pub use model::{MapDefaults, MarkerId, MarkerStyle, PinState, SearchSettings};
pub use ports::{AlertKind, MapPort, PagePort};
pub use view::{ListEntry, MarkerSpec, RenderedResults, marker_for, render};

pub use reefscout_client::{LngLat, Site, SiteId};
