use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A row of the `schools` table.
///
/// Decoding expects a signed integer `id` and `DOUBLE` coordinates; an
/// `INT UNSIGNED` id or `DECIMAL` columns fail to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl School {
    pub fn coord(&self) -> Coord {
        Coord::new(self.latitude, self.longitude)
    }
}

/// Registration body as sent by the caller. Fields stay untyped so that a
/// wrong JSON type is a validation failure rather than a parse error.
#[derive(Debug, Default)]
pub struct SchoolCandidate {
    pub name: serde_json::Value,
    pub address: serde_json::Value,
    pub latitude: serde_json::Value,
    pub longitude: serde_json::Value,
}

impl SchoolCandidate {
    /// Reads the four fields from a JSON object; missing fields are `Null`.
    /// Any other JSON shape (arrays included) yields `None`.
    pub fn from_json(body: serde_json::Value) -> Option<Self> {
        let serde_json::Value::Object(mut fields) = body else {
            return None;
        };

        let mut take = |key: &str| fields.remove(key).unwrap_or_default();

        Some(Self {
            name: take("name"),
            address: take("address"),
            latitude: take("latitude"),
            longitude: take("longitude"),
        })
    }
}

/// A validated, trimmed school ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSchool {
    #[serde(flatten)]
    pub school: School,
    pub distance: f64,
}
