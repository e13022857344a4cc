use super::types::{CompoundingFrequency, ProjectionInput, ProjectionPoint, ProjectionResult};

/// Maps a calculator snapshot to its projected balance, real value and yearly series.
///
/// Inputs are not validated. Out-of-range rates are extrapolated through the same
/// closed form, so the output may be meaningless but the call never panics.
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let future_value = future_value_at(input, input.years);
    let inflation_adjusted_future_value = inflation_adjusted_at(input, future_value, input.years);
    let total_contributions = total_contributions(input);

    let series = (0..=input.years)
        .map(|year| {
            let nominal = future_value_at(input, year);
            let adjusted = inflation_adjusted_at(input, nominal, year);
            ProjectionPoint {
                year_index: year,
                nominal_value: round_half_up(nominal),
                inflation_adjusted_value: round_half_up(adjusted),
            }
        })
        .collect();

    ProjectionResult {
        future_value,
        inflation_adjusted_future_value,
        total_contributions,
        total_gain: future_value - total_contributions,
        series,
    }
}

/// Nominal balance after `year` whole years of compounding and contributions.
pub fn future_value_at(input: &ProjectionInput, year: u32) -> f64 {
    let n = f64::from(input.compounding_frequency.periods_per_year());
    let r = input.annual_return_percent / 100.0;
    let periods = n * f64::from(year);
    let contribution = contribution_per_period(input);

    // At r == 0 the annuity factor is 0/0; use its limit, one contribution per period.
    let (growth, annuity) = if r == 0.0 {
        (1.0, periods)
    } else {
        growth_and_annuity(r / n, periods)
    };

    scale(input.initial_investment, growth) + scale(contribution, annuity)
}

/// `(1 + i)^p` and `((1 + i)^p - 1) / i`, accurate for tiny non-zero `i`.
fn growth_and_annuity(periodic_rate: f64, periods: f64) -> (f64, f64) {
    if periodic_rate > -1.0 {
        let k = periods * periodic_rate.ln_1p();
        (k.exp(), k.exp_m1() / periodic_rate)
    } else {
        // ln_1p is undefined here; extrapolate through powf.
        let growth = (1.0 + periodic_rate).powf(periods);
        (growth, (growth - 1.0) / periodic_rate)
    }
}

/// A zero amount stays zero even when the factor overflowed to infinity.
fn scale(amount: f64, factor: f64) -> f64 {
    if amount == 0.0 { 0.0 } else { amount * factor }
}

/// Discounts `value` by `year` years of compound inflation.
pub fn inflation_adjusted_at(input: &ProjectionInput, value: f64, year: u32) -> f64 {
    let deflator = (1.0 + input.inflation_rate_percent / 100.0).powf(f64::from(year));
    value / deflator
}

/// Amount fed into the annuity term each compounding period.
///
/// Annual compounding uses the monthly amount as-is; every other frequency uses
/// twelve months' worth, regardless of how many periods the year has.
pub fn contribution_per_period(input: &ProjectionInput) -> f64 {
    match input.compounding_frequency {
        CompoundingFrequency::Annually => input.monthly_contribution,
        CompoundingFrequency::Monthly | CompoundingFrequency::Daily => {
            input.monthly_contribution * 12.0
        }
    }
}

pub fn total_contributions(input: &ProjectionInput) -> f64 {
    input.initial_investment + input.monthly_contribution * 12.0 * f64::from(input.years)
}

/// Nearest whole unit, ties towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
