use serde::{Deserialize, Serialize};

/// Static ship template as stored in the config store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipTemplate {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    pub rarity: i32,
    #[serde(rename = "type")]
    pub ship_type: i32,
    #[serde(default)]
    pub star: i32,
    #[serde(default)]
    pub nationality: i32,
    /// Construction time in seconds.
    #[serde(default)]
    pub build_time: i64,
    /// Build pool the template can be rolled from, if any.
    #[serde(default)]
    pub pool_id: Option<i32>,
}

impl ShipTemplate {
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
