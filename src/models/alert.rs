use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub category: String,
    pub current_total: Decimal,
    /// The limit of the threshold entry that fired.
    pub limit: Decimal,
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Alert: Spending limit exceeded for {}. Current spending: {}",
            self.category, self.current_total
        )
    }
}

/// Receiver for alerts raised while recording a transaction.
pub trait AlertSink {
    fn notify(&mut self, alert: Alert);
}

impl AlertSink for Vec<Alert> {
    fn notify(&mut self, alert: Alert) {
        self.push(alert);
    }
}

impl<F> AlertSink for F
where
    F: FnMut(Alert),
{
    fn notify(&mut self, alert: Alert) {
        self(alert)
    }
}
