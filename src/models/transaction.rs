use rust_decimal::Decimal;

/// One recorded expense. Immutable once appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Format: "YYYY-M", month without zero padding
    pub month_key: String,
    pub amount: Decimal,
    pub category: String,
}

impl Transaction {
    pub fn new(month_key: String, amount: Decimal, category: String) -> Self {
        Self {
            month_key,
            amount,
            category,
        }
    }

    pub fn is_in(&self, category: &str) -> bool {
        self.category == category
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Date: {}, Amount: {}, Category: {}",
            self.month_key, self.amount, self.category
        )
    }
}
