mod engine;
mod types;

pub use engine::{
    contribution_per_period, future_value_at, inflation_adjusted_at, project, round_half_up,
    total_contributions,
};
pub use types::{CompoundingFrequency, ProjectionInput, ProjectionPoint, ProjectionResult};
