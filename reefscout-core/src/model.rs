use reefscout_client::LngLat;

/// Handle returned by the map port for a marker it is displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

/// Whether a search pin is on the map, and where.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinState {
    pub placed: bool,
    pub coordinate: LngLat,
}

impl PinState {
    pub fn location(&self) -> Option<LngLat> {
        self.placed.then_some(self.coordinate)
    }
}

/// Tunables for the two search modes
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    /// Proximity search radius, in miles
    pub radius: u32,
    pub location_zoom: f64,
    pub text_zoom: f64,
    pub min_query_len: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            radius: 100,
            location_zoom: 6.0,
            text_zoom: 3.0,
            min_query_len: 2,
        }
    }
}

impl SearchSettings {
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub color: String,
    pub scale: f64,
    pub popup_offset: u32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: "#F78154".to_string(),
            scale: 0.6,
            popup_offset: 25,
        }
    }
}

/// View the map opens on before any search.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDefaults {
    pub center: LngLat,
    pub zoom: f64,
    pub pin_color: String,
    /// Zoom of the single-site map on a detail page
    pub detail_zoom: f64,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            center: LngLat::new(-170.0, 20.0),
            zoom: 1.0,
            pin_color: "#8FC0A9".to_string(),
            detail_zoom: 5.0,
        }
    }
}
