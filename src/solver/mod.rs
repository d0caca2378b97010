mod config;
pub mod constants;
mod core;
mod equation;
mod errors;
mod report;

pub use self::core::DigitsSolver;
pub use config::SolverConfig;
pub use equation::Equation;
pub use errors::SolverError;
pub use report::{RejectionCounts, SolveReport};
