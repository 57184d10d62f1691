use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::input;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit PocketPlan", cmd_quit, r);
    register_command!("quit", "Quit PocketPlan", cmd_quit, r);
    register_command!("home", "Go to Home", cmd_home, r);
    register_command!("t", "View transactions", cmd_transactions, r);
    register_command!("transactions", "View transactions", cmd_transactions, r);
    register_command!("history", "View transactions", cmd_transactions, r);
    register_command!("o", "Monthly overview charts", cmd_overview, r);
    register_command!("overview", "Monthly overview charts", cmd_overview, r);
    register_command!("c", "Go to Categories", cmd_categories, r);
    register_command!("categories", "Go to Categories", cmd_categories, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!(
        "category",
        "Add category & threshold (e.g. :category Food 250)",
        cmd_category,
        r
    );
    register_command!(
        "cat",
        "Add category & threshold (e.g. :cat Food 250)",
        cmd_category,
        r
    );
    register_command!(
        "add",
        "Add transaction (e.g. :add March 2024 12.50 Food)",
        cmd_add,
        r
    );
    register_command!(
        "txn",
        "Add transaction (e.g. :txn 3 2024 12.50 Food)",
        cmd_add,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

/// Split off up to `n - 1` whitespace-separated fields; the remainder,
/// inner spacing kept, is the last one.
fn split_fields(args: &str, n: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(n);
    let mut rest = args.trim();
    while fields.len() + 1 < n {
        match rest.split_once(char::is_whitespace) {
            Some((head, tail)) => {
                fields.push(head);
                rest = tail.trim_start();
            }
            None => break,
        }
    }
    if !rest.is_empty() {
        fields.push(rest);
    }
    fields
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_home(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Home;
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_overview(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Overview;
    if app.manager.transaction_count() == 0 {
        app.set_status("No transactions yet. Add one with :add");
    }
    Ok(())
}

fn cmd_categories(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Categories;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_category(args: &str, app: &mut App) -> anyhow::Result<()> {
    // Last token is the limit, everything before is the category name
    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    if parts.len() < 2 || parts[1].trim().is_empty() {
        app.set_status("Usage: :category <name> <threshold>. Example: :category Food 250");
        return Ok(());
    }

    let name = parts[1].trim();
    match input::parse_limit(parts[0]) {
        Ok(limit) => app.add_category(name, limit),
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    let usage = format!(
        "Usage: :add <month> <year> <amount> <category>. Example: :add March {} 12.50 Food",
        input::current_year()
    );

    let parts = split_fields(args, 4);
    if parts.len() < 4 || parts[3].is_empty() {
        app.set_status(usage);
        return Ok(());
    }

    let registered = app.manager.list_categories();
    if registered.is_empty() {
        app.set_status("No categories available. Please add a category first.");
        return Ok(());
    }

    let parsed = input::parse_month(parts[0]).and_then(|month| {
        let year = input::parse_year(parts[1])?;
        let amount = input::parse_amount(parts[2])?;
        Ok((input::month_key(&year, month), amount))
    });
    let (month_key, amount) = match parsed {
        Ok(v) => v,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };

    // Exact match first, then case-insensitive, keeping the registered spelling
    let wanted = parts[3];
    let category = registered
        .iter()
        .find(|c| **c == wanted)
        .or_else(|| {
            let lower = wanted.to_lowercase();
            registered.iter().find(|c| c.to_lowercase() == lower)
        })
        .map(|c| c.to_string());

    match category {
        Some(category) => app.add_transaction(month_key, amount, category),
        None => {
            let msg = format!(
                "Category '{wanted}' not found. Available: {}",
                registered.join(", ")
            );
            app.set_status(msg);
        }
    }

    Ok(())
}
