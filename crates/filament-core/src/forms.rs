//! Form Drafts
//!
//! Raw text the user typed, turned into request payloads only after the
//! required fields check out.

use crate::error::{ApiError, ApiResult};
use crate::models::{FilamentType, NewFilamentType, NewProduct, NewPurchase, ProductCategory, ProductSpec};
use crate::money::Currency;

fn required(value: &str, field: &'static str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn positive_number(value: &str, field: &'static str) -> ApiResult<f64> {
    let text = required(value, field)?.replace(',', ".");
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(ApiError::InvalidNumber(field)),
    }
}

// ========================
// Filament Type
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilamentTypeDraft {
    pub manufacturer: String,
    pub material: String,
    pub color: String,
}

impl FilamentTypeDraft {
    pub fn build(&self) -> ApiResult<NewFilamentType> {
        Ok(NewFilamentType {
            manufacturer: required(&self.manufacturer, "manufacturer")?,
            material: required(&self.material, "material")?,
            color: required(&self.color, "color")?,
        })
    }
}

// ========================
// Purchase
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDraft {
    pub filament_type_id: Option<u32>,
    pub price: String,
    pub initial_weight: String,
    currency: Currency,
    exchange_rate: String,
}

impl Default for PurchaseDraft {
    fn default() -> Self {
        Self {
            filament_type_id: None,
            price: String::new(),
            initial_weight: String::new(),
            currency: Currency::default(),
            exchange_rate: "1".to_string(),
        }
    }
}

impl PurchaseDraft {
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn exchange_rate(&self) -> &str {
        &self.exchange_rate
    }

    /// The base currency pins the rate to 1 and hides the field; switching
    /// away from it reveals an empty field the user has to fill in.
    pub fn set_currency(&mut self, currency: Currency) {
        if currency.is_base() {
            self.exchange_rate = "1".to_string();
        } else if self.currency.is_base() {
            self.exchange_rate.clear();
        }
        self.currency = currency;
    }

    /// Ignored while the base currency is selected
    pub fn set_exchange_rate(&mut self, rate: &str) {
        if self.rate_editable() {
            self.exchange_rate = rate.to_string();
        }
    }

    pub fn rate_editable(&self) -> bool {
        !self.currency.is_base()
    }

    /// Preselect the first filament type once the list arrives
    pub fn ensure_filament_type(&mut self, filament_types: &[FilamentType]) {
        let still_listed = self
            .filament_type_id
            .is_some_and(|id| filament_types.iter().any(|ft| ft.id == id));
        if !still_listed {
            self.filament_type_id = filament_types.first().map(|ft| ft.id);
        }
    }

    pub fn build(&self) -> ApiResult<NewPurchase> {
        let filament_type_id = self.filament_type_id.ok_or(ApiError::MissingField("filament type"))?;
        let exchange_rate = if self.currency.is_base() {
            1.0
        } else {
            positive_number(&self.exchange_rate, "exchange rate")?
        };
        Ok(NewPurchase {
            filament_type_id,
            price: positive_number(&self.price, "price")?,
            initial_weight: positive_number(&self.initial_weight, "initial weight")?,
            currency: self.currency,
            exchange_rate,
        })
    }

    /// Empty the typed fields, keeping the selected filament type and currency
    pub fn clear(&mut self) {
        self.price.clear();
        self.initial_weight.clear();
        if self.rate_editable() {
            self.exchange_rate.clear();
        }
    }
}

// ========================
// Product
// ========================

/// Which set of fields the add-product form shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// manufacturer / materialType / color
    Filament,
    /// name / unit
    Generic,
}

impl CategoryKind {
    pub fn of(category: Option<&ProductCategory>) -> Self {
        match category {
            Some(c) if c.is_filament() => CategoryKind::Filament,
            _ => CategoryKind::Generic,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub category_id: Option<u32>,
    pub name: String,
    pub unit: String,
    pub manufacturer: String,
    pub material_type: String,
    pub color: String,
}

impl ProductDraft {
    pub fn kind(&self, categories: &[ProductCategory]) -> CategoryKind {
        CategoryKind::of(self.selected_category(categories))
    }

    fn selected_category<'a>(&self, categories: &'a [ProductCategory]) -> Option<&'a ProductCategory> {
        let id = self.category_id?;
        categories.iter().find(|c| c.id == id)
    }

    /// Preselect the first category when nothing is selected yet
    pub fn ensure_category(&mut self, categories: &[ProductCategory]) {
        if self.category_id.is_none() {
            self.category_id = categories.first().map(|c| c.id);
        }
    }

    pub fn build(&self, categories: &[ProductCategory]) -> ApiResult<NewProduct> {
        let category = self
            .selected_category(categories)
            .ok_or(ApiError::MissingField("category"))?;

        let spec = match CategoryKind::of(Some(category)) {
            CategoryKind::Filament => ProductSpec::Filament {
                manufacturer: required(&self.manufacturer, "manufacturer")?,
                material_type: required(&self.material_type, "material type")?,
                color: required(&self.color, "color")?,
            },
            CategoryKind::Generic => ProductSpec::Generic {
                name: required(&self.name, "name")?,
                unit: required(&self.unit, "unit")?,
            },
        };
        Ok(NewProduct { category_id: category.id, spec })
    }

    /// Empty the typed fields, keeping the selected category
    pub fn clear(&mut self) {
        *self = Self { category_id: self.category_id, ..Self::default() };
    }
}
