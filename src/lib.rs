pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod optimizer;

pub use error::{BarError, Result};
pub use models::{MenuEntry, StockReport};
