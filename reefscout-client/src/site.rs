use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// Longitude/latitude pair, in that order, as the map library expects.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lng, self.lat)
    }
}

/// Server-assigned site identifier.
///
/// The backend emits integer ids, but templates hand them back to us as
/// strings (`data-id` attributes), so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteId(String);

impl SiteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for SiteId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for SiteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for SiteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Numeric ids go back out as numbers
        match self.0.parse::<i64>() {
            Ok(n) => serializer.serialize_i64(n),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for SiteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Ok(SiteId(n.to_string())),
            RawId::Text(s) => Ok(SiteId(s)),
        }
    }
}

/// A dive site as returned by `/sites/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    #[serde(deserialize_with = "lenient_coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient_coordinate")]
    pub lng: f64,
}

impl Site {
    pub fn position(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }

    /// Path of the site's detail page.
    pub fn detail_path(&self) -> String {
        format!("/sites/{}", self.id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

/// Coordinates are stored as numeric columns but some serializers emit them
/// as decimal strings.
fn lenient_coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match RawCoordinate::deserialize(deserializer)? {
        RawCoordinate::Number(n) => Ok(n),
        RawCoordinate::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid coordinate '{}'", s))),
    }
}
