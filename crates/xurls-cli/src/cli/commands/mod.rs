//! CLI command handlers. Each command is in its own file.

mod completions;
mod extract;
mod man;
mod parse;
mod stdout;

pub use completions::run_completions;
pub use extract::run_extract;
pub use man::run_man;
pub use parse::run_parse;
