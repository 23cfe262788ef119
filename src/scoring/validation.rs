use super::config::WeightConfig;
use super::error::{ScoreError, WeightCategory};

/// Validate the three weight categories before scoring.
/// Returns all validation errors at once (not just the first), so a user
/// with two bad categories sees both.
pub fn validate_weights(config: &WeightConfig) -> Result<(), Vec<ScoreError>> {
    let sums = [
        (WeightCategory::TotalSales, config.total_sales.sum()),
        (WeightCategory::Clv, config.clv.sum()),
        (WeightCategory::Demand, config.demand.sum()),
    ];

    let errors: Vec<ScoreError> = sums
        .into_iter()
        .filter(|(_, sum)| *sum != 100)
        .map(|(category, sum)| ScoreError::InvalidWeightSum { category, sum })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
