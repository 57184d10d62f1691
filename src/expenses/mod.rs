use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::*;

/// Category → summed amount for one month.
pub(crate) type CategoryTotals = BTreeMap<String, Decimal>;

/// Month key → category totals. Both levels iterate in ascending string order.
pub(crate) type MonthlyTotals = BTreeMap<String, CategoryTotals>;

/// In-memory session store: the transaction log and the threshold registry.
/// Both are append-only.
#[derive(Debug, Default)]
pub(crate) struct ExpenseManager {
    transactions: Vec<Transaction>,
    thresholds: Vec<CategoryThreshold>,
}

impl ExpenseManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // ── Transactions ──────────────────────────────────────────

    /// Append a transaction, then check its category against every
    /// registered threshold. Each exceeded threshold is reported to `sink`.
    pub(crate) fn add_transaction(
        &mut self,
        month_key: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        sink: &mut impl AlertSink,
    ) {
        let txn = Transaction::new(month_key.into(), amount, category.into());
        tracing::debug!(
            month = %txn.month_key,
            amount = %txn.amount,
            category = %txn.category,
            "transaction recorded"
        );
        let category = txn.category.clone();
        self.transactions.push(txn);

        for alert in self.check_threshold(&category) {
            tracing::info!(
                category = %alert.category,
                total = %alert.current_total,
                limit = %alert.limit,
                "spending limit exceeded"
            );
            sink.notify(alert);
        }
    }

    #[cfg(test)]
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Sum of every recorded amount for `category`, across all months.
    /// Saturates at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
    pub(crate) fn total_for(&self, category: &str) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.is_in(category))
            .fold(Decimal::ZERO, |acc, t| accumulate(acc, t.amount))
    }

    /// One line per transaction, in the order they were added.
    pub(crate) fn view_history(&self) -> String {
        let mut history = String::new();
        for txn in &self.transactions {
            history.push_str(&txn.to_string());
            history.push('\n');
        }
        history
    }

    // ── Thresholds ────────────────────────────────────────────

    /// Register a limit. Earlier entries for the same category are kept,
    /// and nothing is checked until the next transaction in that category.
    pub(crate) fn set_category_threshold(&mut self, category: impl Into<String>, limit: Decimal) {
        let threshold = CategoryThreshold::new(category.into(), limit);
        tracing::debug!(
            category = %threshold.category,
            limit = %threshold.limit,
            "threshold registered"
        );
        self.thresholds.push(threshold);
    }

    pub(crate) fn thresholds(&self) -> &[CategoryThreshold] {
        &self.thresholds
    }

    pub(crate) fn thresholds_for<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a CategoryThreshold> + 'a {
        self.thresholds.iter().filter(move |t| t.category == category)
    }

    /// Distinct registered categories, first registration first.
    pub(crate) fn list_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for t in &self.thresholds {
            if !seen.contains(&t.category.as_str()) {
                seen.push(&t.category);
            }
        }
        seen
    }

    // ── Alerts ────────────────────────────────────────────────

    /// Alerts for every threshold of `category` below its current total,
    /// in registration order.
    pub(crate) fn check_threshold(&self, category: &str) -> Vec<Alert> {
        let total = self.total_for(category);
        self.thresholds_for(category)
            .filter(|t| t.is_exceeded_by(total))
            .map(|t| Alert {
                category: category.to_string(),
                current_total: total,
                limit: t.limit,
            })
            .collect()
    }

    // ── Aggregation ───────────────────────────────────────────

    pub(crate) fn monthly_category_totals(&self) -> MonthlyTotals {
        let mut totals = MonthlyTotals::new();
        for txn in &self.transactions {
            let total = totals
                .entry(txn.month_key.clone())
                .or_default()
                .entry(txn.category.clone())
                .or_default();
            *total = accumulate(*total, txn.amount);
        }
        totals
    }
}

fn accumulate(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!(%total, %amount, "total out of range, saturating");
        total.saturating_add(amount)
    })
}
