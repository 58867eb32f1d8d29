use clap::{Parser, Subcommand};

/// BarStockPlanner — finds the exact ingredient shelf that covers the most cocktails.
#[derive(Parser, Debug)]
#[command(name = "bar_stock_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu file (JSON or CSV).
    #[arg(short, long, default_value = "menu.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan the shelf: pick N ingredients covering the most cocktails.
    Plan {
        /// Number of ingredients to put on the shelf.
        #[arg(short, long)]
        budget: Option<usize>,

        /// Restrict the shelf to ingredients of one category.
        #[arg(short, long)]
        category: Option<String>,

        /// Branch-node ceiling for the exact search.
        #[arg(long, default_value_t = 5_000_000)]
        max_nodes: u64,

        /// Wall-clock ceiling for the search, in milliseconds.
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// List the ingredient categories present on the menu.
    Categories,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            budget: None,
            category: None,
            max_nodes: 5_000_000,
            timeout_ms: None,
        }
    }
}
