//! Seams between the controller and whatever draws the page.
//!
//! A browser front-end backs these with the map library and the DOM; the
//! terminal front-end prints; tests record calls.

use crate::model::MarkerId;
use crate::view::{ListEntry, MarkerSpec};
use reefscout_client::{LngLat, SiteId};

pub trait MapPort {
    fn set_center(&mut self, center: LngLat);
    fn set_zoom(&mut self, zoom: f64);
    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerId;
    fn remove_marker(&mut self, id: MarkerId);
    /// Draw the search pin at `at` in `color` (a `#RRGGBB` string).
    fn show_pin(&mut self, at: LngLat, color: &str);
    fn hide_pin(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

pub trait PagePort {
    fn clear_list(&mut self);
    fn append_entry(&mut self, entry: &ListEntry);
    /// Drop the list entry for `id`, if one is shown.
    fn remove_entry(&mut self, id: &SiteId);

    /// Replace the text of the results message area.
    fn show_message(&mut self, message: &str);
    fn clear_message(&mut self);

    /// Label of the list toggle button.
    fn set_status(&mut self, label: &str);
    fn set_list_visible(&mut self, visible: bool);

    fn clear_search_text(&mut self);

    /// Dismissible flash message.
    fn show_alert(&mut self, kind: AlertKind, message: &str);
}
