use chrono::Local;
use clap::Args;
use colored::Colorize;
use smarttodo_core::quotes::{self, Quote};

use crate::utils::command_error;

#[derive(Args, Debug)]
pub struct Command {
    /// Print every quote instead of the quote of the day
    #[clap(long)]
    all: bool,
}

pub async fn handle(command: Command) -> command_error::Result<()> {
    if command.all {
        for quote in quotes::quotes() {
            print_quote(quote);
        }
        return Ok(());
    }

    let today = Local::now().date_naive();
    print_quote(quotes::quote_of_the_day(today));
    Ok(())
}

fn print_quote(quote: &Quote) {
    println!("{} {}", "❝".yellow().bold(), quote.text.italic());
    println!("  {} {}", "─".dimmed(), quote.author.bold());
}
