pub(crate) mod cli;
mod repl;

pub use cli::run;
pub use repl::exec;
