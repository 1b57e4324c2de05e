//! The expense store: an in-memory collection backed by one JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing::warn;
use uuid::Uuid;

use super::error::StoreError;
use crate::expense::{Expense, ExpenseFilter, ExpenseUpdate, NewExpense};
use crate::summary::ExpenseSummary;

/// In-memory expense collection backed by a single JSON file.
///
/// The whole collection is rewritten to disk after every mutation and read
/// back in full at open. There is exactly one logical writer, so no file
/// locking is attempted. Construct one instance and pass it explicitly;
/// nothing here is global.
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    degraded: bool,
}

impl ExpenseStore {
    /// Opens a store backed by the given file.
    ///
    /// A missing, unreadable, or corrupt blob degrades to an empty
    /// collection. The condition is logged, never surfaced.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let expenses = match Self::hydrate(&path) {
            Ok(expenses) => expenses,
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to hydrate expense blob, starting empty"
                );
                Vec::new()
            }
        };
        Self {
            path,
            expenses,
            degraded: false,
        }
    }

    fn hydrate(path: &Path) -> Result<Vec<Expense>, StoreError> {
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Adds a new expense and persists the collection.
    ///
    /// Never fails: a failed persist leaves the record in memory and flags
    /// the store as degraded.
    pub fn add(&mut self, input: NewExpense) -> Expense {
        let now = Utc::now();
        let expense = Expense {
            id: Uuid::new_v4(),
            amount: input.amount,
            description: input.description,
            category: input.category,
            date: input.date,
            created_at: now,
            updated_at: now,
        };
        self.expenses.push(expense.clone());
        self.persist();
        expense
    }

    /// Applies a partial update to the expense with the given id.
    ///
    /// Absent fields are left unchanged. `id` and `created_at` are never
    /// altered; `updated_at` is refreshed.
    pub fn update(&mut self, id: Uuid, patch: ExpenseUpdate) -> Result<Expense, StoreError> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(description) = patch.description {
            expense.description = description;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }
        expense.updated_at = Utc::now();

        let updated = expense.clone();
        self.persist();
        Ok(updated)
    }

    /// Removes the expense with the given id.
    ///
    /// Returns whether a removal occurred; false is a no-op.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        let removed = self.expenses.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Single-record lookup.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Returns every expense matching the filter, sorted by expense date
    /// descending. Ties break by creation time descending, then id ascending.
    #[must_use]
    pub fn list(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        let mut results: Vec<Expense> = self
            .expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        results.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        results
    }

    /// Aggregate summary over the whole collection, anchored to the current
    /// date for the monthly window.
    #[must_use]
    pub fn summary(&self) -> ExpenseSummary {
        self.summary_as_of(Utc::now().date_naive())
    }

    /// Aggregate summary with an explicit "today" for the monthly window.
    #[must_use]
    pub fn summary_as_of(&self, today: NaiveDate) -> ExpenseSummary {
        crate::summary::summarize(&self.expenses, today)
    }

    /// CSV export of the collection in insertion order.
    #[must_use]
    pub fn export_csv(&self) -> String {
        crate::export::to_csv(&self.expenses)
    }

    /// Empties the collection and persists the empty state. Irreversible.
    pub fn clear(&mut self) {
        self.expenses.clear();
        self.persist();
    }

    /// True when the most recent persist attempt failed and the in-memory
    /// state has diverged from the durable blob.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Number of expenses in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// True when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn persist(&mut self) {
        match self.write_blob() {
            Ok(()) => self.degraded = false,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to persist expense blob, in-memory state stands"
                );
                self.degraded = true;
            }
        }
    }

    fn write_blob(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec(&self.expenses)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}
