//! Currency and Purchase Row Formatting
//!
//! The client never computes money; it only labels and formats what the API
//! returns. PLN is the base currency, its exchange rate is always 1.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Purchase;

/// Currencies offered by the purchase form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Pln,
    Eur,
    Usd,
}

/// Currency in which exchange rates and cost-per-gram are expressed
pub const BASE_CURRENCY: Currency = Currency::Pln;

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Pln, Currency::Eur, Currency::Usd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Pln => "PLN",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn is_base(&self) -> bool {
        *self == BASE_CURRENCY
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PLN" => Ok(Currency::Pln),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            other => Err(format!("unsupported currency: {}", other)),
        }
    }
}

/// "80g / 100g"
pub fn format_weight(current: f64, initial: f64) -> String {
    format!("{}g / {}g", current, initial)
}

/// "50.00 EUR"
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{:.2} {}", price, currency)
}

/// "0.6025 PLN", or a dash when the API did not send the figure
pub fn format_cost_per_gram(cost: Option<f64>) -> String {
    match cost {
        Some(cost) => format!("{:.4} {}", cost, BASE_CURRENCY),
        None => "-".to_string(),
    }
}

/// Calendar date of an ISO timestamp; unparseable input is shown as-is
pub fn format_date(raw: &str) -> String {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return ts.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// One rendered line of the purchases table
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRow {
    pub id: u32,
    pub filament: String,
    pub weight: String,
    pub price: String,
    pub cost_per_gram: String,
    pub date: String,
}

impl From<&Purchase> for PurchaseRow {
    fn from(p: &Purchase) -> Self {
        Self {
            id: p.id,
            filament: p
                .filament_type
                .as_ref()
                .map(|ft| ft.label())
                .unwrap_or_else(|| format!("#{}", p.filament_type_id)),
            weight: format_weight(p.current_weight, p.initial_weight),
            price: format_price(p.price, &p.currency),
            cost_per_gram: format_cost_per_gram(p.cost_per_gram_in_pln),
            date: p.purchase_date.as_deref().map(format_date).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase() -> Purchase {
        Purchase {
            id: 1,
            filament_type_id: 5,
            filament_type: None,
            price: 50.0,
            currency: "EUR".into(),
            exchange_rate: 4.82,
            initial_weight: 100.0,
            current_weight: 80.0,
            purchase_date: Some("2024-05-17T08:30:00Z".into()),
            cost_per_gram_in_pln: Some(0.6025),
        }
    }

    #[test]
    fn test_purchase_row_formatting() {
        let row = PurchaseRow::from(&purchase());
        assert_eq!(row.weight, "80g / 100g");
        assert_eq!(row.price, "50.00 EUR");
        assert_eq!(row.cost_per_gram, "0.6025 PLN");
        assert_eq!(row.date, "2024-05-17");
        assert_eq!(row.filament, "#5");
    }

    #[test]
    fn test_fractional_weight_and_missing_cost() {
        assert_eq!(format_weight(12.5, 1000.0), "12.5g / 1000g");
        assert_eq!(format_cost_per_gram(None), "-");
        assert_eq!(format_cost_per_gram(Some(0.1)), "0.1000 PLN");
    }

    #[test]
    fn test_format_date_fallbacks() {
        assert_eq!(format_date("2023-12-01"), "2023-12-01");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_currency_parse_and_base() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("GBP".parse::<Currency>().is_err());
        assert!(Currency::Pln.is_base());
        assert!(!Currency::Usd.is_base());
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
    }
}
