mod chart;
mod expenses;
mod input;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if run::as_cli(&args)? {
        run::as_tui()?;
    }
    Ok(())
}
