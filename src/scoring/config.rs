use serde::{Deserialize, Serialize};

/// Weight configuration for the three composite scores.
///
/// Each category assigns integer percentages to five metrics and must sum to
/// exactly 100 (validated before scoring, not by serde). Any omitted category
/// falls back to its default.
///
/// Example YAML:
/// ```yaml
/// weights:
///   total_sales:
///     conversion_rate: 25
///     add_to_cart_rate: 20
///     total_sales: 35
///     repeat_purchase_rate: 15
///     order_rate_confirmed: 5
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WeightConfig {
    #[serde(default)]
    pub total_sales: TotalSalesWeights,

    #[serde(default)]
    pub clv: ClvWeights,

    #[serde(default)]
    pub demand: DemandWeights,
}

/// Weights for the Total Sales composite score.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TotalSalesWeights {
    pub conversion_rate: u32,
    pub add_to_cart_rate: u32,
    pub total_sales: u32,
    pub repeat_purchase_rate: u32,
    pub order_rate_confirmed: u32,
}

impl Default for TotalSalesWeights {
    fn default() -> Self {
        Self {
            conversion_rate: 25,
            add_to_cart_rate: 20,
            total_sales: 35,
            repeat_purchase_rate: 15,
            order_rate_confirmed: 5,
        }
    }
}

impl TotalSalesWeights {
    pub fn sum(&self) -> u32 {
        self.conversion_rate
            + self.add_to_cart_rate
            + self.total_sales
            + self.repeat_purchase_rate
            + self.order_rate_confirmed
    }
}

/// Weights for the customer-lifetime-value composite score.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClvWeights {
    pub repeat_purchase_rate: u32,
    pub quantity_sold_confirmed: u32,
    pub avg_time_before_repurchase: u32,
    pub order_rate_confirmed: u32,
    pub purchase_rate: u32,
}

impl Default for ClvWeights {
    fn default() -> Self {
        Self {
            repeat_purchase_rate: 40,
            quantity_sold_confirmed: 20,
            avg_time_before_repurchase: 20,
            order_rate_confirmed: 10,
            purchase_rate: 10,
        }
    }
}

impl ClvWeights {
    pub fn sum(&self) -> u32 {
        self.repeat_purchase_rate
            + self.quantity_sold_confirmed
            + self.avg_time_before_repurchase
            + self.order_rate_confirmed
            + self.purchase_rate
    }
}

/// Weights for the Demand composite score.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DemandWeights {
    pub quantity_sold_confirmed: u32,
    pub product_visitors: u32,
    pub search_clicks: u32,
    pub add_to_cart_rate: u32,
    pub order_rate_confirmed: u32,
}

impl Default for DemandWeights {
    fn default() -> Self {
        Self {
            quantity_sold_confirmed: 40,
            product_visitors: 20,
            search_clicks: 10,
            add_to_cart_rate: 15,
            order_rate_confirmed: 15,
        }
    }
}

impl DemandWeights {
    pub fn sum(&self) -> u32 {
        self.quantity_sold_confirmed
            + self.product_visitors
            + self.search_clicks
            + self.add_to_cart_rate
            + self.order_rate_confirmed
    }
}

/// Integer percentage as a fraction for the weighted sums.
pub(crate) fn frac(weight: u32) -> f64 {
    f64::from(weight) / 100.0
}
