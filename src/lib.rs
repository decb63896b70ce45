pub mod chapters;
pub mod cli;
pub mod content;
pub mod error;
pub mod output;
pub mod update;
