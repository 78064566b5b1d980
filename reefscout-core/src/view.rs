use crate::model::MarkerStyle;
use reefscout_client::{LngLat, Site, SiteId};

/// One row of the results list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub site_id: SiteId,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub site_id: SiteId,
    pub position: LngLat,
    pub color: String,
    pub scale: f64,
    pub popup_label: String,
    pub popup_href: String,
    pub popup_offset: u32,
}

/// Everything needed to draw one search result, independent of how it is drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedResults {
    /// First site's position; `None` for an empty result
    pub center: Option<LngLat>,
    pub entries: Vec<ListEntry>,
    pub markers: Vec<MarkerSpec>,
}

impl RenderedResults {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub fn marker_for(site: &Site, style: &MarkerStyle) -> MarkerSpec {
    MarkerSpec {
        site_id: site.id.clone(),
        position: site.position(),
        color: style.color.clone(),
        scale: style.scale,
        popup_label: site.name.clone(),
        popup_href: site.detail_path(),
        popup_offset: style.popup_offset,
    }
}

pub fn render(sites: &[Site], style: &MarkerStyle) -> RenderedResults {
    let entries = sites
        .iter()
        .map(|site| ListEntry {
            site_id: site.id.clone(),
            label: site.name.clone(),
            href: site.detail_path(),
        })
        .collect();

    let markers = sites.iter().map(|site| marker_for(site, style)).collect();

    RenderedResults {
        center: sites.first().map(Site::position),
        entries,
        markers,
    }
}
