pub mod approval;
pub mod config;
pub mod schedule;

pub use approval::*;
pub use config::*;
pub use schedule::*;
