use serde::{Deserialize, Serialize};

pub const INVALID_INPUT: &str = "Invalid input data";
pub const INVALID_COORDINATES: &str = "Invalid latitude or longitude query parameters";
pub const SERVER_ERROR: &str = "Server error";
pub const SCHOOL_ADDED: &str = "School added successfully";

#[derive(Debug, Serialize, Deserialize)]
pub struct AddSchoolResponse {
    pub message: String,

    #[serde(rename = "schoolId")]
    pub school_id: u64,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSchoolsRequest {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl ListSchoolsRequest {
    /// Collects the coordinate parameters from raw query pairs. A repeated key
    /// keeps every value, comma-joined, so `latitude=1&latitude=2` reads as
    /// `"1,2"` and its numeric prefix wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut r = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "latitude" => &mut r.latitude,
                "longitude" => &mut r.longitude,
                _ => continue,
            };

            *slot = Some(match slot.take() {
                Some(existing) => format!("{existing},{value}"),
                None => value,
            });
        }

        r
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ErrorResponse {
    pub status: axum::http::StatusCode,
    pub body: ErrorBody,
}
