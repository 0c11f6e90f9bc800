//! API Models
//!
//! Data structures matching the JSON the inventory API speaks (camelCase on
//! the wire). Response types decode leniently; request payloads are strict.

use serde::{Deserialize, Serialize};

use crate::money::Currency;

// ========================
// Records
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilamentType {
    pub id: u32,
    pub manufacturer: String,
    pub material: String,
    pub color: String,
}

impl FilamentType {
    /// "Manufacturer Material - Color", as listed in tables and selects
    pub fn label(&self) -> String {
        format!("{} {} - {}", self.manufacturer, self.material, self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: u32,
    pub filament_type_id: u32,
    /// Join materialized by the API
    #[serde(default)]
    pub filament_type: Option<FilamentType>,
    #[serde(deserialize_with = "lenient::number")]
    pub price: f64,
    pub currency: String,
    #[serde(default = "one", deserialize_with = "lenient::number")]
    pub exchange_rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub initial_weight: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub current_weight: f64,
    #[serde(default)]
    pub purchase_date: Option<String>,
    /// Computed server-side, displayed verbatim
    #[serde(
        rename = "costPerGramInPLN",
        default,
        deserialize_with = "lenient::optional_number"
    )]
    pub cost_per_gram_in_pln: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: u32,
    pub name: String,
}

impl ProductCategory {
    /// Categories named "filament" (any case) use the filament form shape
    pub fn is_filament(&self) -> bool {
        self.name.to_lowercase() == "filament"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    #[serde(default)]
    pub category_id: Option<u32>,
    /// Join materialized by the API
    #[serde(default)]
    pub category: Option<ProductCategory>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub material_type: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Product {
    /// Name for generic products, "manufacturer materialType color" for filaments
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        [&self.manufacturer, &self.material_type, &self.color]
            .iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Category name from the join, falling back to the loaded category list
    pub fn category_name(&self, categories: &[ProductCategory]) -> String {
        if let Some(category) = &self.category {
            return category.name.clone();
        }
        self.category_id
            .and_then(|id| categories.iter().find(|c| c.id == id))
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of a refused create call
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFilamentType {
    pub manufacturer: String,
    pub material: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchase {
    pub filament_type_id: u32,
    pub price: f64,
    pub initial_weight: f64,
    pub currency: Currency,
    pub exchange_rate: f64,
}

/// Product body; the shape depends on the selected category's kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub category_id: u32,
    #[serde(flatten)]
    pub spec: ProductSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductSpec {
    Filament {
        manufacturer: String,
        #[serde(rename = "materialType")]
        material_type: String,
        color: String,
    },
    Generic {
        name: String,
        unit: String,
    },
}

fn one() -> f64 {
    1.0
}

/// Numeric fields arrive either as JSON numbers or as decimal strings
mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    impl NumberOrString {
        fn into_f64<E: Error>(self) -> Result<f64, E> {
            match self {
                NumberOrString::Number(n) => Ok(n),
                NumberOrString::Text(s) => s
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| E::custom(format!("invalid number: {:?}", s))),
            }
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        NumberOrString::deserialize(deserializer)?.into_f64()
    }

    pub fn optional_number<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Option::<NumberOrString>::deserialize(deserializer)?
            .map(NumberOrString::into_f64)
            .transpose()
    }
}
