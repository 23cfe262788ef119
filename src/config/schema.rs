use serde::{Deserialize, Serialize};

use crate::scoring::WeightConfig;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub weights: WeightConfig,
}
