pub mod cli;
pub mod commands;
pub mod corpus;
pub mod report;

pub use cli::*;
pub use corpus::{DirectoryCorpus, Encoding};
pub use report::RunReport;
