//! The single-site map on a site's detail page.

use crate::model::{MapDefaults, MarkerId, MarkerStyle};
use crate::ports::MapPort;
use crate::view::{MarkerSpec, marker_for};
use reefscout_client::Site;
use tracing::debug;

pub struct SiteDetail<M> {
    map: M,
    style: MarkerStyle,
    zoom: f64,
    marker: Option<MarkerId>,
}

impl<M: MapPort> SiteDetail<M> {
    pub fn new(map: M) -> Self {
        Self::with_defaults(map, &MapDefaults::default())
    }

    pub fn with_defaults(map: M, defaults: &MapDefaults) -> Self {
        Self {
            map,
            style: MarkerStyle::default(),
            zoom: defaults.detail_zoom,
            marker: None,
        }
    }

    pub fn with_marker_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Center on `site` and mark it. Only one site is shown at a time.
    pub fn show(&mut self, site: &Site) -> MarkerId {
        if let Some(previous) = self.marker.take() {
            self.map.remove_marker(previous);
        }

        self.map.set_zoom(self.zoom);
        self.map.set_center(site.position());

        // Detail markers are drawn at full size
        let marker = MarkerSpec {
            scale: 1.0,
            ..marker_for(site, &self.style)
        };
        let id = self.map.add_marker(&marker);
        self.marker = Some(id);

        debug!("Showing site {} at {}", site.id, site.position());
        id
    }
}
