use thiserror::Error;

/// Which weight configuration a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightCategory {
    TotalSales,
    Clv,
    Demand,
}

impl std::fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Labels match the category headers users see in their config.
        let label = match self {
            WeightCategory::TotalSales => "Total Sales Weights",
            WeightCategory::Clv => "CLV Weights",
            WeightCategory::Demand => "Demand Score Weights",
        };
        f.write_str(label)
    }
}

/// Structural failures detected before any scoring happens.
///
/// Numeric degeneracies (zero-variance columns, zero product views) are NOT
/// errors: they propagate as non-finite floats and fail the later threshold
/// comparisons on their own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("the following required columns are missing: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("total weight must be 100%. The current sum of {category} is {sum}%")]
    InvalidWeightSum { category: WeightCategory, sum: u32 },

    #[error("column '{column}', row {row}: '{value}' is not a number")]
    NonNumericValue {
        column: String,
        row: usize,
        value: String,
    },
}
