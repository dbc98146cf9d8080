//! Interactive terminal driver: prompts for columns, prints the board after
//! every move, and handles rematches.

mod app;

pub use app::App;
