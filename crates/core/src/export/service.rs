//! CSV rendering service.

use crate::expense::Expense;

const HEADER: [&str; 4] = ["Date", "Description", "Category", "Amount"];

/// Renders the expenses as CSV in the given (insertion) order.
///
/// Each field is double-quote-wrapped; embedded quote characters are NOT
/// escaped, preserving the historical export format byte-for-byte. Rows are
/// newline-joined with no trailing newline. An empty collection yields an
/// empty string.
#[must_use]
pub fn to_csv(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return String::new();
    }

    let mut rows = Vec::with_capacity(expenses.len() + 1);
    rows.push(quote_row(HEADER.map(str::to_string)));
    for expense in expenses {
        rows.push(quote_row([
            expense.date.to_string(),
            expense.description.clone(),
            expense.category.to_string(),
            expense.amount.to_string(),
        ]));
    }
    rows.join("\n")
}

fn quote_row(fields: [String; 4]) -> String {
    fields
        .iter()
        .map(|f| format!("\"{f}\""))
        .collect::<Vec<_>>()
        .join(",")
}
