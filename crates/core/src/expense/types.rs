//! Expense record and category types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Expense categories supported by the system.
///
/// A closed enumeration shared by every interface boundary: storage,
/// filters, summary, export, and form input. Serialized as its exact label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Food and groceries.
    Food,
    /// Transportation and travel.
    Transportation,
    /// Entertainment and leisure.
    Entertainment,
    /// Shopping and retail.
    Shopping,
    /// Bills and recurring charges.
    Bills,
    /// Everything else.
    Other,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Food,
        Self::Transportation,
        Self::Entertainment,
        Self::Shopping,
        Self::Bills,
        Self::Other,
    ];

    /// Returns the category label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Food" => Ok(Self::Food),
            "Transportation" => Ok(Self::Transportation),
            "Entertainment" => Ok(Self::Entertainment),
            "Shopping" => Ok(Self::Shopping),
            "Bills" => Ok(Self::Bills),
            "Other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// A single recorded expense.
///
/// Serialized with camelCase field names, matching the durable blob layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, assigned at creation, immutable.
    pub id: Uuid,
    /// Monetary amount. Positivity is enforced at the API boundary,
    /// not by the store.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Expense category.
    pub category: Category,
    /// When the expense occurred (distinct from record creation time).
    pub date: NaiveDate,
    /// Record creation time, set by the store, never changes.
    pub created_at: DateTime<Utc>,
    /// Last mutation time, refreshed by the store on every update.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an expense. Id and timestamps are store-assigned.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Monetary amount.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Expense category.
    pub category: Category,
    /// When the expense occurred.
    pub date: NaiveDate,
}

/// Partial update for an expense. Absent fields are left unchanged;
/// id and creation time cannot be supplied.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    /// New amount, if changing.
    pub amount: Option<Decimal>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New category, if changing.
    pub category: Option<Category>,
    /// New expense date, if changing.
    pub date: Option<NaiveDate>,
}

/// Filter predicates for listing expenses.
///
/// Every field is optional and independently combinable; supplied
/// predicates compose with logical AND.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Exact category match.
    pub category: Option<Category>,
    /// Inclusive lower bound on the expense date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the expense date.
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive substring match against the description or
    /// the category label.
    pub search: Option<String>,
}

impl ExpenseFilter {
    /// Returns true when the expense passes every supplied predicate.
    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if expense.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if expense.date > to {
                return false;
            }
        }
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            if !expense.description.to_lowercase().contains(&query)
                && !expense.category.as_str().to_lowercase().contains(&query)
            {
                return false;
            }
        }
        true
    }
}
