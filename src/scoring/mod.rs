pub mod config;
pub mod engine;
pub mod error;
pub mod stats;
pub mod validation;

pub use config::*;
pub use engine::{calculate_scores, score_products, ScoredProduct};
pub use error::{ScoreError, WeightCategory};
pub use validation::validate_weights;
