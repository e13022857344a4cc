//! Text rendering of a projection: input echo, results block, yearly table and chart.
//!
//! All locale-dependent wording and number formatting goes through `locale`;
//! the figures themselves come straight from `core::project`.

mod chart;

pub use chart::{
    MAX_CHART_HEIGHT, MAX_CHART_WIDTH, MIN_CHART_HEIGHT, MIN_CHART_WIDTH, render_chart,
};

use crate::core::{ProjectionInput, ProjectionResult};
use crate::locale::{LabelKey, Locale, format_currency, format_percent, frequency_label, label};

/// Title, input echo and the four headline results.
pub fn render_summary(input: &ProjectionInput, result: &ProjectionResult, locale: Locale) -> String {
    let money = |v: f64| format_currency(locale, v);
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", label(locale, LabelKey::Title)));
    out.push_str(label(locale, LabelKey::Description));
    out.push_str("\n\n");

    let inputs = [
        (LabelKey::InitialInvestment, money(input.initial_investment)),
        (LabelKey::AnnualReturn, format_percent(input.annual_return_percent)),
        (LabelKey::Years, input.years.to_string()),
        (
            LabelKey::CompoundingFrequency,
            frequency_label(locale, input.compounding_frequency).to_string(),
        ),
        (LabelKey::MonthlyContributions, money(input.monthly_contribution)),
        (LabelKey::InflationRate, format_percent(input.inflation_rate_percent)),
    ];
    for (key, value) in inputs {
        out.push_str(&format!("{}: {value}\n", label(locale, key)));
    }

    out.push_str(&format!("\n{}\n", label(locale, LabelKey::Results)));
    let results = [
        (LabelKey::FutureValue, result.future_value),
        (
            LabelKey::InflationAdjustedValue,
            result.inflation_adjusted_future_value,
        ),
        (LabelKey::TotalContributions, result.total_contributions),
        (LabelKey::TotalGain, result.total_gain),
    ];
    for (key, value) in results {
        out.push_str(&format!("{}: {}\n", label(locale, key), money(value)));
    }

    out
}

/// One right-aligned row per series point.
pub fn render_year_table(result: &ProjectionResult, locale: Locale) -> String {
    let headers = [
        label(locale, LabelKey::Year),
        label(locale, LabelKey::FutureValue),
        label(locale, LabelKey::InflationAdjustedValue),
    ];
    let rows: Vec<[String; 3]> = result
        .series
        .iter()
        .map(|p| {
            [
                p.year_index.to_string(),
                format_currency(locale, p.nominal_value),
                format_currency(locale, p.inflation_adjusted_value),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>w0$}  {:>w1$}  {:>w2$}\n",
        headers[0],
        headers[1],
        headers[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    ));
    for [year, nominal, adjusted] in &rows {
        out.push_str(&format!(
            "{year:>w0$}  {nominal:>w1$}  {adjusted:>w2$}\n",
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        ));
    }
    out
}

/// Summary, yearly table and chart, separated by blank lines.
pub fn render_report(
    input: &ProjectionInput,
    result: &ProjectionResult,
    locale: Locale,
    chart_width: usize,
    chart_height: usize,
) -> String {
    let mut out = render_summary(input, result, locale);
    out.push('\n');
    out.push_str(&render_year_table(result, locale));
    out.push('\n');
    out.push_str(&render_chart(&result.series, locale, chart_width, chart_height));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CompoundingFrequency, project};

    fn sample_input() -> ProjectionInput {
        ProjectionInput {
            initial_investment: 10_000.0,
            annual_return_percent: 7.0,
            years: 10,
            compounding_frequency: CompoundingFrequency::Annually,
            monthly_contribution: 100.0,
            inflation_rate_percent: 2.0,
        }
    }

    #[test]
    fn english_summary_lists_inputs_and_results() {
        let input = sample_input();
        let result = project(&input);
        let summary = render_summary(&input, &result, Locale::English);

        assert!(summary.starts_with("=== Investment Calculator ===\n"));
        assert!(summary.contains("Initial Investment: $10,000.00\n"));
        assert!(summary.contains("Expected Annual Return (%): 7.0%\n"));
        assert!(summary.contains("Compounding Frequency: Annually\n"));
        assert!(summary.contains("Future Value: $21,053.16\n"));
        assert!(summary.contains("Total Contributions: $22,000.00\n"));
        assert!(summary.contains("Total Gain: -$946.84\n"));
    }

    #[test]
    fn norwegian_summary_uses_kroner_and_translated_labels() {
        let input = sample_input();
        let result = project(&input);
        let summary = render_summary(&input, &result, Locale::Norwegian);

        assert!(summary.starts_with("=== Investeringskalkulator ===\n"));
        assert!(summary.contains("Fremtidig verdi: 21\u{a0}053,16\u{a0}kr\n"));
        assert!(summary.contains("Renteberegning: Årlig\n"));
    }

    #[test]
    fn year_table_has_one_row_per_point_plus_header() {
        let result = project(&sample_input());
        let table = render_year_table(&result, Locale::English);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), result.series.len() + 1);
        assert!(lines[0].trim_start().starts_with("Year"));
        assert!(lines[1].trim_start().starts_with("0  "));
        assert!(lines[11].contains("$21,053.00"));
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn full_report_contains_all_sections() {
        let input = sample_input();
        let result = project(&input);
        let report = render_report(&input, &result, Locale::English, 30, 10);

        assert!(report.contains("Results\n"));
        assert!(report.contains("Year: 0-10"));
        assert!(report.contains("* Future Value"));
    }
}
