use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AddToCartRequest {
    pub item_id: i32,
    pub name: String,
    /// Accepts a JSON number or a numeric string.
    #[serde(deserialize_with = "number_or_numeric_string")]
    #[schema(value_type = f64)]
    pub price: f64,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct RemoveFromCartRequest {
    pub item_id: i32,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CartTotalResponse {
    pub total: f64,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct PlaceOrderRequest {
    pub location: String,
    #[serde(default)]
    pub cart_items: Vec<i32>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PlaceOrderResponse {
    pub order_id: String,
    pub delivery_time: i32,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LocationImageResponse {
    pub image_url: String,
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid price '{}'", text))),
    }
}
