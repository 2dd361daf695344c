pub mod checks;
pub mod reporter;
pub mod runner;

pub use runner::RealCommandRunner;
