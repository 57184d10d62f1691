use rust_decimal::Decimal;

/// Spending limit for a category. The registry may hold several per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryThreshold {
    pub category: String,
    pub limit: Decimal,
}

impl CategoryThreshold {
    pub fn new(category: String, limit: Decimal) -> Self {
        Self { category, limit }
    }

    /// Strictly greater: spending exactly at the limit does not trip it.
    pub fn is_exceeded_by(&self, total: Decimal) -> bool {
        self.limit < total
    }
}
