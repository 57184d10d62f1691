use std::collections::VecDeque;

use rust_decimal::Decimal;

use crate::expenses::ExpenseManager;
use crate::models::Alert;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Home,
    Transactions,
    Overview,
    Categories,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Home,
            Self::Transactions,
            Self::Overview,
            Self::Categories,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Overview => write!(f, "Overview"),
            Self::Categories => write!(f, "Categories"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) manager: ExpenseManager,

    /// Alerts waiting to be acknowledged, oldest first.
    pub(crate) alerts: VecDeque<Alert>,

    // Transactions
    pub(crate) history_index: usize,
    pub(crate) history_scroll: usize,

    // Overview (one entry per month)
    pub(crate) overview_index: usize,
    pub(crate) overview_scroll: usize,

    // Categories (one entry per threshold)
    pub(crate) category_index: usize,
    pub(crate) category_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Home,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            manager: ExpenseManager::new(),
            alerts: VecDeque::new(),

            history_index: 0,
            history_scroll: 0,

            overview_index: 0,
            overview_scroll: 0,

            category_index: 0,
            category_scroll: 0,

            visible_rows: 20,
        }
    }

    /// Register a category limit and report it on the status line.
    pub(crate) fn add_category(&mut self, name: &str, limit: Decimal) {
        self.manager.set_category_threshold(name, limit);
        self.set_status(format!("Category {name} added with threshold {limit}"));
    }

    /// Record a transaction. Alerts raised by it are queued for display.
    pub(crate) fn add_transaction(&mut self, month_key: String, amount: Decimal, category: String) {
        let alerts = &mut self.alerts;
        self.manager
            .add_transaction(month_key, amount, category, &mut |alert: Alert| {
                alerts.push_back(alert)
            });
        self.set_status("Transaction added successfully.");
    }

    pub(crate) fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub(crate) fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    /// Number of rows in the list shown on the current screen.
    pub(crate) fn list_len(&self) -> usize {
        match self.screen {
            Screen::Home => 0,
            Screen::Transactions => self.manager.transaction_count(),
            Screen::Overview => self.manager.monthly_category_totals().len(),
            Screen::Categories => self.manager.thresholds().len(),
        }
    }

    /// Cursor and scroll offset for the current screen's list.
    pub(crate) fn cursor_mut(&mut self) -> Option<(&mut usize, &mut usize)> {
        match self.screen {
            Screen::Home => None,
            Screen::Transactions => Some((&mut self.history_index, &mut self.history_scroll)),
            Screen::Overview => Some((&mut self.overview_index, &mut self.overview_scroll)),
            Screen::Categories => Some((&mut self.category_index, &mut self.category_scroll)),
        }
    }

    /// Rows that fit on one page of the current screen.
    pub(crate) fn page_size(&self) -> usize {
        match self.screen {
            Screen::Overview => (self.visible_rows / super::screens::overview::CHART_ROWS).max(1),
            _ => self.visible_rows.max(1),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
