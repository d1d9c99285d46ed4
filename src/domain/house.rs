use serde::{Deserialize, Serialize};

/// A property listed on the marketplace. Field names follow the
/// listings API wire format exactly; the client treats everything
/// except `id` as opaque display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// Server-assigned, unique, immutable.
    pub id: i64,
    pub address: String,
    pub zipcode: i64,
    pub city: String,
    pub property_value: f64,
    pub money_raised: f64,
    pub asking_price: f64,
    pub tags: Vec<String>,
}

/// Creation payload: a house without an id. The server assigns one
/// and echoes the full record back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHouse {
    pub address: String,
    pub zipcode: i64,
    pub city: String,
    pub property_value: f64,
    pub money_raised: f64,
    pub asking_price: f64,
    pub tags: Vec<String>,
}
