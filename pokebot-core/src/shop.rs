//! Shop items, the add-item form and the local working list.

use crate::Record;
use crate::catalog::ITEM_NAMES;
use crate::form::{is_blank, parse_leading_int};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const SAVED_MESSAGE: &str = "Shop items saved successfully!";
pub const REMOVED_MESSAGE: &str = "Item removed locally. Save all changes to persist.";

/// Units on sale. Serialized as a bare number or the string `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StockRepr", into = "StockRepr")]
pub enum Stock {
    Limited(u32),
    Unlimited,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StockRepr {
    Count(u32),
    Label(String),
}

impl TryFrom<StockRepr> for Stock {
    type Error = String;

    fn try_from(repr: StockRepr) -> Result<Self, Self::Error> {
        match repr {
            StockRepr::Count(count) => Ok(Self::Limited(count)),
            StockRepr::Label(label) if label == "unlimited" => Ok(Self::Unlimited),
            StockRepr::Label(label) => Err(format!("unknown stock value '{label}'")),
        }
    }
}

impl From<Stock> for StockRepr {
    fn from(stock: Stock) -> Self {
        match stock {
            Stock::Limited(count) => Self::Count(count),
            Stock::Unlimited => Self::Label("unlimited".to_string()),
        }
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(count) => write!(f, "{count}"),
            Self::Unlimited => f.write_str("Unlimited"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Local key for items added since the last save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_id: Option<String>,
    pub item_name: String,
    pub price: u32,
    pub stock: Stock,
    #[serde(default)]
    pub description: String,
}

impl ShopItem {
    #[must_use]
    pub fn new(item_name: &str, price: u32, stock: Stock) -> Self {
        Self {
            id: None,
            temp_id: None,
            item_name: item_name.to_string(),
            price,
            stock,
            description: String::new(),
        }
    }

    /// Persisted id when saved, otherwise the temporary one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().or(self.temp_id.as_deref())
    }

    #[must_use]
    pub fn description_or_placeholder(&self) -> &str {
        if is_blank(&self.description) {
            "No description provided."
        } else {
            &self.description
        }
    }
}

impl Record for ShopItem {
    const COLLECTION: &'static str = "shop-items";
    const ID_PREFIX: &'static str = "shop";

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
        self.temp_id = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopItemError {
    #[error("Item name is required.")]
    MissingName,
    #[error("Price must be greater than zero.")]
    InvalidPrice,
    #[error("Stock must be a positive number or unlimited.")]
    InvalidStock,
}

/// Add-item form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopItemDraft {
    pub item_name: String,
    pub price: i64,
    pub stock: i64,
    pub unlimited: bool,
    pub description: String,
}

impl Default for ShopItemDraft {
    fn default() -> Self {
        Self {
            item_name: ITEM_NAMES[0].to_string(),
            price: 100,
            stock: 10,
            unlimited: false,
            description: String::new(),
        }
    }
}

impl ShopItemDraft {
    pub fn set_price(&mut self, raw: &str) {
        self.price = parse_leading_int(raw).unwrap_or(0);
    }

    /// Ignored while the unlimited box is ticked.
    pub fn set_stock(&mut self, raw: &str) {
        if !self.unlimited {
            self.stock = parse_leading_int(raw).unwrap_or(0);
        }
    }

    /// Unticking restores the default stock of 10.
    pub fn set_unlimited(&mut self, unlimited: bool) {
        self.unlimited = unlimited;
        if !unlimited {
            self.stock = 10;
        }
    }

    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn validate(&self) -> Result<ShopItem, ShopItemError> {
        if is_blank(&self.item_name) {
            return Err(ShopItemError::MissingName);
        }
        let price = u32::try_from(self.price)
            .ok()
            .filter(|price| *price > 0)
            .ok_or(ShopItemError::InvalidPrice)?;
        let stock = if self.unlimited {
            Stock::Unlimited
        } else {
            u32::try_from(self.stock)
                .ok()
                .filter(|stock| *stock > 0)
                .map(Stock::Limited)
                .ok_or(ShopItemError::InvalidStock)?
        };
        Ok(ShopItem {
            description: self.description.trim().to_string(),
            ..ShopItem::new(self.item_name.trim(), price, stock)
        })
    }
}

/// The page's working list of shop items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopCatalog {
    items: Vec<ShopItem>,
}

impl ShopCatalog {
    #[must_use]
    pub const fn from_items(items: Vec<ShopItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Validate `draft` and append it under a `temp-{now_ms}` key.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the list is left unchanged.
    pub fn add(&mut self, draft: &ShopItemDraft, now_ms: u64) -> Result<String, ShopItemError> {
        let mut item = draft.validate()?;
        item.temp_id = Some(format!("temp-{now_ms}"));
        let message = format!(
            "{} added locally. Save all changes to persist.",
            item.item_name
        );
        self.items.push(item);
        Ok(message)
    }

    /// Drop the item with the given key. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.key() != Some(key));
        self.items.len() != before
    }

    /// Adopt the list returned by a save-all call.
    pub fn replace(&mut self, saved: Vec<ShopItem>) {
        self.items = saved;
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<ShopItem> {
        self.items.clone()
    }
}

/// `1500` → `"1,500 Gold"`.
#[must_use]
pub fn format_gold(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped} Gold")
}
