//! Summary aggregation service.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::types::{CategoryShare, ExpenseSummary};
use crate::expense::{Category, Expense};

/// Computes the aggregate summary for a collection of expenses.
///
/// `today` anchors the monthly window: amounts whose date falls within
/// `today`'s calendar month count toward the monthly total.
#[must_use]
pub fn summarize(expenses: &[Expense], today: NaiveDate) -> ExpenseSummary {
    let total: Decimal = expenses.iter().map(|e| e.amount).sum();

    let monthly_total: Decimal = expenses
        .iter()
        .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
        .map(|e| e.amount)
        .sum();

    let mut category_breakdown: BTreeMap<Category, Decimal> =
        Category::ALL.iter().map(|c| (*c, Decimal::ZERO)).collect();
    for expense in expenses {
        if let Some(amount) = category_breakdown.get_mut(&expense.category) {
            *amount += expense.amount;
        }
    }

    let mut top_categories: Vec<CategoryShare> = category_breakdown
        .iter()
        .map(|(category, amount)| CategoryShare {
            category: *category,
            amount: *amount,
            percentage: percentage_of(*amount, total),
        })
        .collect();
    // Stable sort: equal amounts keep category declaration order.
    top_categories.sort_by(|a, b| b.amount.cmp(&a.amount));

    ExpenseSummary {
        total,
        monthly_total,
        category_breakdown,
        top_categories,
    }
}

/// Share of `total` in percent, rounded to two decimal places.
/// Defined as 0 when `total` is 0 to avoid division by zero.
fn percentage_of(amount: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        Decimal::ZERO
    } else {
        (amount / total * Decimal::ONE_HUNDRED).round_dp(2)
    }
}
