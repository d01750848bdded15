//! Session-held shopping cart.
//!
//! Prices are kept as `Decimal` exactly as they were given, so totals are
//! exact and do not depend on the order entries were added in.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Invalid price")]
    TotalOverflow,
}

/// Converts a client or catalog price into a `Decimal`.
///
/// Returns `None` for negative, NaN or infinite prices, and for prices
/// outside the decimal range.
pub fn to_decimal(price: f64) -> Option<Decimal> {
    if !price.is_finite() || price < 0.0 {
        return None;
    }
    Decimal::from_f64(price)
}

pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
}

impl CartEntry {
    pub fn new(id: i32, name: impl Into<String>, price: f64) -> Option<Self> {
        Some(Self {
            id,
            name: name.into(),
            price: to_decimal(price)?,
        })
    }

    pub fn price(&self) -> f64 {
        to_f64(self.price)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Appends `entry` unless it would push the total out of range.
    pub fn add(&mut self, entry: CartEntry) -> Result<(), CartError> {
        self.total_amount()
            .and_then(|total| total.checked_add(entry.price))
            .ok_or(CartError::TotalOverflow)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Drops every entry carrying `item_id` and returns how many were removed.
    pub fn remove(&mut self, item_id: i32) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != item_id);
        before - self.entries.len()
    }

    pub fn total_amount(&self) -> Option<Decimal> {
        self.entries
            .iter()
            .try_fold(Decimal::ZERO, |total, entry| total.checked_add(entry.price))
    }

    /// `None` only when the entries no longer fit in a decimal sum.
    pub fn total(&self) -> Option<f64> {
        self.total_amount().map(to_f64)
    }

    pub fn item_ids(&self) -> Vec<i32> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
