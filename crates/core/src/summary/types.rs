//! Summary data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::expense::Category;

/// One category's share of overall spending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    /// Category.
    pub category: Category,
    /// Cumulative amount for the category.
    pub amount: Decimal,
    /// Share of the grand total in percent, rounded to two decimal places.
    /// Defined as 0 when the grand total is 0.
    pub percentage: Decimal,
}

/// Aggregate summary over the full expense collection. Derived, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    /// Grand total of all amounts.
    pub total: Decimal,
    /// Total over the current calendar month.
    pub monthly_total: Decimal,
    /// Per-category cumulative amounts, zero-amount categories included.
    pub category_breakdown: BTreeMap<Category, Decimal>,
    /// All categories ranked by cumulative amount descending. Ties keep
    /// category declaration order.
    pub top_categories: Vec<CategoryShare>,
}
