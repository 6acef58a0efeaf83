pub mod analyze;
pub mod generate;
pub mod shell;

pub use analyze::AnalyzeArgs;
pub use generate::GenerateArgs;
