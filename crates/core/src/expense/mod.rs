//! Expense domain types and filters.

pub mod types;


pub use types::{Category, Expense, ExpenseFilter, ExpenseUpdate, NewExpense};
