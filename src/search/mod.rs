pub mod alpha_beta;
pub mod config;
pub mod driver;
pub mod evaluator;
pub mod minimax;
pub mod stats;
pub mod strategy;
pub mod tt;

pub use alpha_beta::AlphaBeta;
pub use config::SearchConfig;
pub use driver::{decide, Decision};
pub use evaluator::PositionEvaluator;
pub use minimax::Minimax;
pub use stats::{SearchReport, SearchStats};
pub use strategy::SearchStrategy;
pub use tt::{TableEntry, TranspositionTable};
