use super::config::{frac, WeightConfig};
use super::error::ScoreError;
use super::stats::{mean, normalize, sample_std_dev};
use super::validation::validate_weights;
use crate::dataset::{ProductRecord, Table};

/// One surviving product with its three normalized composite scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProduct {
    pub product_code: String,
    pub product_name: String,
    pub total_sales_score: f64,
    pub clv_score: f64,
    pub demand_score: f64,
}

/// Run the full pipeline over a raw table: schema check, weight validation,
/// typed conversion, composite scoring, outlier filter.
///
/// Structural problems (missing columns, bad weight sums, non-numeric cells)
/// abort before any scoring and are reported together. The survivors keep
/// their original row order.
pub fn calculate_scores(
    table: &Table,
    weights: &WeightConfig,
) -> Result<Vec<ScoredProduct>, Vec<ScoreError>> {
    let mut errors = Vec::new();

    let missing = table.missing_columns();
    if !missing.is_empty() {
        errors.push(ScoreError::MissingColumns { columns: missing });
    }

    // Weights are checked even when columns are missing; the user gets the
    // whole picture in one run.
    if let Err(weight_errors) = validate_weights(weights) {
        errors.extend(weight_errors);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let products = table.to_products().map_err(|e| vec![e])?;
    Ok(score_products(&products, weights))
}

/// Score typed records and keep the outliers.
///
/// Degenerate rows (zero product views, zero-variance columns) produce
/// non-finite scores; every `>=` against them is false, so they drop out of
/// the result without special-casing.
pub fn score_products(products: &[ProductRecord], weights: &WeightConfig) -> Vec<ScoredProduct> {
    let conversion_rate: Vec<f64> = products
        .iter()
        .map(|p| p.buyers / p.product_views)
        .collect();

    let total_sales_column: Vec<f64> = products.iter().map(|p| p.total_sales).collect();
    let normalized_total_sales = normalize(&total_sales_column);

    let ts = &weights.total_sales;
    let total_sales_raw: Vec<f64> = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            conversion_rate[i] * frac(ts.conversion_rate)
                + p.add_to_cart_rate * frac(ts.add_to_cart_rate)
                + normalized_total_sales[i] * frac(ts.total_sales)
                + p.repeat_purchase_rate * frac(ts.repeat_purchase_rate)
                + p.order_rate_confirmed * frac(ts.order_rate_confirmed)
        })
        .collect();

    let clv = &weights.clv;
    let clv_raw: Vec<f64> = products
        .iter()
        .map(|p| {
            p.repeat_purchase_rate * frac(clv.repeat_purchase_rate)
                + p.quantity_sold_confirmed * frac(clv.quantity_sold_confirmed)
                + p.avg_time_before_repurchase * frac(clv.avg_time_before_repurchase)
                + p.order_rate_confirmed * frac(clv.order_rate_confirmed)
                + p.purchase_rate * frac(clv.purchase_rate)
        })
        .collect();

    let demand = &weights.demand;
    let demand_raw: Vec<f64> = products
        .iter()
        .map(|p| {
            p.quantity_sold_confirmed * frac(demand.quantity_sold_confirmed)
                + p.product_visitors * frac(demand.product_visitors)
                + p.search_clicks * frac(demand.search_clicks)
                + p.add_to_cart_rate * frac(demand.add_to_cart_rate)
                + p.order_rate_confirmed * frac(demand.order_rate_confirmed)
        })
        .collect();

    let total_sales_score = normalize(&total_sales_raw);
    let clv_score = normalize(&clv_raw);
    let demand_score = normalize(&demand_raw);

    let total_sales_cutoff = outlier_threshold(&total_sales_score);
    let clv_cutoff = outlier_threshold(&clv_score);
    let demand_cutoff = outlier_threshold(&demand_score);

    products
        .iter()
        .enumerate()
        .filter(|(i, _)| {
            total_sales_score[*i] >= total_sales_cutoff
                && clv_score[*i] >= clv_cutoff
                && demand_score[*i] >= demand_cutoff
        })
        .map(|(i, p)| ScoredProduct {
            product_code: p.product_code.clone(),
            product_name: p.product_name.clone(),
            total_sales_score: total_sales_score[i],
            clv_score: clv_score[i],
            demand_score: demand_score[i],
        })
        .collect()
}

/// Upper outlier cutoff for a normalized score column: mean plus two sample
/// standard deviations (N-1 divisor).
pub fn outlier_threshold(values: &[f64]) -> f64 {
    mean(values) + 2.0 * sample_std_dev(values)
}
