//! Request and response bodies exchanged with the backend.

use crate::site::{Site, SiteId};
use serde::{Deserialize, Serialize};

/// Body of `POST /sites/search`. The `mode` field selects the query kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SearchRequest {
    /// Sites within `dist` of a point
    Sites { lat: f64, lng: f64, dist: u32 },
    /// Sites whose name matches `str`
    Search {
        #[serde(rename = "str")]
        text: String,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyResponse {
    #[serde(default)]
    pub sites: Vec<Site>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub matches: Vec<Site>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BucketListAdd<'a> {
    pub id: &'a SiteId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nearby_request_shape() {
        let body = serde_json::to_value(SearchRequest::Sites {
            lat: 25.7,
            lng: -80.1,
            dist: 100,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"mode": "sites", "lat": 25.7, "lng": -80.1, "dist": 100})
        );
    }

    #[test]
    fn test_text_request_shape() {
        let body = serde_json::to_value(SearchRequest::Search {
            text: "wreck".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"mode": "search", "str": "wreck"}));
    }

    #[test]
    fn test_missing_arrays_decode_empty() {
        let nearby: NearbyResponse = serde_json::from_str("{}").unwrap();
        let matches: MatchResponse = serde_json::from_str("{}").unwrap();
        assert!(nearby.sites.is_empty());
        assert!(matches.matches.is_empty());
    }
}
