use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Annually,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }
}

/// One calculator snapshot. Rates are in percent, money in whole currency units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub initial_investment: f64,
    pub annual_return_percent: f64,
    pub years: u32,
    pub compounding_frequency: CompoundingFrequency,
    pub monthly_contribution: f64,
    pub inflation_rate_percent: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year_index: u32,
    pub nominal_value: f64,
    pub inflation_adjusted_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub future_value: f64,
    pub inflation_adjusted_future_value: f64,
    pub total_contributions: f64,
    pub total_gain: f64,
    pub series: Vec<ProjectionPoint>,
}
