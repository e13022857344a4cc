use std::collections::BTreeMap;
use std::ffi::OsString;
use std::net::SocketAddr;

use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::core::{CompoundingFrequency, ProjectionInput, ProjectionResult, project};
use crate::locale::{Locale, format_currency, labels};
use crate::report::{
    MAX_CHART_HEIGHT, MAX_CHART_WIDTH, MIN_CHART_HEIGHT, MIN_CHART_WIDTH, render_report,
};

mod error;

pub use error::{ApiError, InputError};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

const DEFAULT_INITIAL_INVESTMENT: f64 = 10_000.0;
const DEFAULT_ANNUAL_RETURN: f64 = 7.0;
const DEFAULT_YEARS: i64 = 10;
const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 100.0;
const DEFAULT_INFLATION_RATE: f64 = 2.0;

const MAX_ANNUAL_RETURN: f64 = 20.0;
const MAX_INFLATION_RATE: f64 = 10.0;
const MAX_YEARS: i64 = 100;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCompoundingFrequency {
    Annually,
    Monthly,
    Daily,
}

impl From<CliCompoundingFrequency> for CompoundingFrequency {
    fn from(value: CliCompoundingFrequency) -> Self {
        match value {
            CliCompoundingFrequency::Annually => CompoundingFrequency::Annually,
            CliCompoundingFrequency::Monthly => CompoundingFrequency::Monthly,
            CliCompoundingFrequency::Daily => CompoundingFrequency::Daily,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiCompoundingFrequency {
    #[serde(alias = "annual", alias = "yearly")]
    Annually,
    #[serde(alias = "month")]
    Monthly,
    #[serde(alias = "day")]
    Daily,
}

impl From<ApiCompoundingFrequency> for CliCompoundingFrequency {
    fn from(value: ApiCompoundingFrequency) -> Self {
        match value {
            ApiCompoundingFrequency::Annually => CliCompoundingFrequency::Annually,
            ApiCompoundingFrequency::Monthly => CliCompoundingFrequency::Monthly,
            ApiCompoundingFrequency::Daily => CliCompoundingFrequency::Daily,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    initial_investment: Option<f64>,
    #[serde(alias = "annualReturnPercent")]
    annual_return: Option<f64>,
    years: Option<i64>,
    compounding_frequency: Option<ApiCompoundingFrequency>,
    #[serde(alias = "monthlyContributions", alias = "contributions")]
    monthly_contribution: Option<f64>,
    #[serde(alias = "inflationRatePercent")]
    inflation_rate: Option<f64>,
    lang: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LabelsQuery {
    lang: Option<String>,
}

#[derive(Parser, Debug)]
#[command(
    name = "growth",
    about = "Investment growth projection: future value, inflation-adjusted value and yearly series",
    after_help = "Run `growth serve [port]` to start the web calculator instead."
)]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_INITIAL_INVESTMENT, allow_negative_numbers = true)]
    initial_investment: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_ANNUAL_RETURN,
        allow_negative_numbers = true,
        help = "Expected annual return in percent, 0 to 20"
    )]
    annual_return: f64,
    #[arg(long, default_value_t = DEFAULT_YEARS, allow_negative_numbers = true)]
    years: i64,
    #[arg(long, value_enum, default_value_t = CliCompoundingFrequency::Annually)]
    compounding_frequency: CliCompoundingFrequency,
    #[arg(long, default_value_t = DEFAULT_MONTHLY_CONTRIBUTION, allow_negative_numbers = true)]
    monthly_contribution: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INFLATION_RATE,
        allow_negative_numbers = true,
        help = "Expected annual inflation in percent, 0 to 10"
    )]
    inflation_rate: f64,
    #[arg(long, default_value = "en", help = "Label language: en or no")]
    lang: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(u16)
            .range(MIN_CHART_WIDTH as i64..=MAX_CHART_WIDTH as i64)
    )]
    chart_width: u16,
    #[arg(
        long,
        default_value_t = 16,
        value_parser = clap::value_parser!(u16)
            .range(MIN_CHART_HEIGHT as i64..=MAX_CHART_HEIGHT as i64)
    )]
    chart_height: u16,
}

#[derive(Debug)]
struct ApiRequest {
    input: ProjectionInput,
    locale: Locale,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormattedResults {
    future_value: String,
    inflation_adjusted_future_value: String,
    total_contributions: String,
    total_gain: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectResponse {
    lang: Locale,
    lang_code: &'static str,
    currency_code: &'static str,
    input: ProjectionInput,
    result: ProjectionResult,
    formatted: FormattedResults,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LabelsResponse {
    lang: Locale,
    lang_code: &'static str,
    currency_code: &'static str,
    labels: BTreeMap<&'static str, &'static str>,
}

fn build_input(cli: &Cli) -> Result<ProjectionInput, InputError> {
    for (field, value) in [
        ("initialInvestment", cli.initial_investment),
        ("annualReturn", cli.annual_return),
        ("monthlyContribution", cli.monthly_contribution),
        ("inflationRate", cli.inflation_rate),
    ] {
        if !value.is_finite() {
            return Err(InputError::NotFinite { field });
        }
    }

    if cli.initial_investment < 0.0 {
        return Err(InputError::OutOfRange {
            field: "initialInvestment",
            constraint: ">= 0",
        });
    }

    if !(0.0..=MAX_ANNUAL_RETURN).contains(&cli.annual_return) {
        return Err(InputError::OutOfRange {
            field: "annualReturn",
            constraint: "between 0 and 20",
        });
    }

    if !(0..=MAX_YEARS).contains(&cli.years) {
        return Err(InputError::OutOfRange {
            field: "years",
            constraint: "between 0 and 100",
        });
    }

    if cli.monthly_contribution < 0.0 {
        return Err(InputError::OutOfRange {
            field: "monthlyContribution",
            constraint: ">= 0",
        });
    }

    if !(0.0..=MAX_INFLATION_RATE).contains(&cli.inflation_rate) {
        return Err(InputError::OutOfRange {
            field: "inflationRate",
            constraint: "between 0 and 10",
        });
    }

    let years = u32::try_from(cli.years).map_err(|_| InputError::OutOfRange {
        field: "years",
        constraint: "between 0 and 100",
    })?;

    Ok(ProjectionInput {
        initial_investment: cli.initial_investment,
        annual_return_percent: cli.annual_return,
        years,
        compounding_frequency: cli.compounding_frequency.into(),
        monthly_contribution: cli.monthly_contribution,
        inflation_rate_percent: cli.inflation_rate,
    })
}

/// Parse command-line arguments, run one projection and render it.
///
/// Argument errors, `--help` and `--version` come back as `ApiError::Usage`;
/// the caller decides whether to print them and exit.
pub fn run_cli<I, T>(args: I) -> Result<String, ApiError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let input = build_input(&cli)?;
    let locale = Locale::resolve(Some(cli.lang.as_str()));
    let result = project(&input);
    log::debug!(
        "projected {} years: future value {:.2}, real {:.2}",
        input.years,
        result.future_value,
        result.inflation_adjusted_future_value
    );

    match cli.format {
        OutputFormat::Text => Ok(render_report(
            &input,
            &result,
            locale,
            usize::from(cli.chart_width),
            usize::from(cli.chart_height),
        )),
        OutputFormat::Json => {
            let response = build_project_response(input, result, locale);
            Ok(format!("{}\n", serde_json::to_string_pretty(&response)?))
        }
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .route("/api/labels", get(labels_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    log::info!("growth HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    json_response(
        StatusCode::NOT_FOUND,
        serde_json::json!({ "error": "Not found" }),
    )
}

async fn project_get_handler(payload: Result<Query<ProjectPayload>, QueryRejection>) -> Response {
    match payload {
        Ok(Query(payload)) => project_handler_impl(payload),
        Err(rejection) => ApiError::InvalidPayload(rejection.body_text()).into_response(),
    }
}

async fn project_post_handler(payload: Result<Json<ProjectPayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => project_handler_impl(payload),
        Err(rejection) => ApiError::InvalidPayload(rejection.body_text()).into_response(),
    }
}

async fn labels_handler(query: Result<Query<LabelsQuery>, QueryRejection>) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return ApiError::InvalidPayload(rejection.body_text()).into_response(),
    };
    let locale = Locale::resolve(query.lang.as_deref());
    json_response(
        StatusCode::OK,
        LabelsResponse {
            lang: locale,
            lang_code: locale.lang_code(),
            currency_code: locale.currency_code(),
            labels: labels(locale),
        },
    )
}

fn project_handler_impl(payload: ProjectPayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(err) => return ApiError::from(err).into_response(),
    };

    let result = project(&request.input);
    log::info!(
        "projection: {} years {:?} at {}% -> {:.2}",
        request.input.years,
        request.input.compounding_frequency,
        request.input.annual_return_percent,
        result.future_value
    );

    let response = build_project_response(request.input, result, request.locale);
    json_response(StatusCode::OK, response)
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, ApiError> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| ApiError::InvalidPayload(format!("Invalid API JSON payload: {e}")))?;
    Ok(api_request_from_payload(payload)?)
}

fn api_request_from_payload(payload: ProjectPayload) -> Result<ApiRequest, InputError> {
    let mut cli = default_cli();

    if let Some(v) = payload.initial_investment {
        cli.initial_investment = v;
    }
    if let Some(v) = payload.annual_return {
        cli.annual_return = v;
    }
    if let Some(v) = payload.years {
        cli.years = v;
    }
    if let Some(v) = payload.compounding_frequency {
        cli.compounding_frequency = v.into();
    }
    if let Some(v) = payload.monthly_contribution {
        cli.monthly_contribution = v;
    }
    if let Some(v) = payload.inflation_rate {
        cli.inflation_rate = v;
    }

    let input = build_input(&cli)?;
    let locale = Locale::resolve(payload.lang.as_deref());
    Ok(ApiRequest { input, locale })
}

fn default_cli() -> Cli {
    Cli {
        initial_investment: DEFAULT_INITIAL_INVESTMENT,
        annual_return: DEFAULT_ANNUAL_RETURN,
        years: DEFAULT_YEARS,
        compounding_frequency: CliCompoundingFrequency::Annually,
        monthly_contribution: DEFAULT_MONTHLY_CONTRIBUTION,
        inflation_rate: DEFAULT_INFLATION_RATE,
        lang: Locale::default().code().to_string(),
        format: OutputFormat::Text,
        chart_width: 60,
        chart_height: 16,
    }
}

fn build_project_response(
    input: ProjectionInput,
    result: ProjectionResult,
    locale: Locale,
) -> ProjectResponse {
    let money = |v: f64| format_currency(locale, v);
    let formatted = FormattedResults {
        future_value: money(result.future_value),
        inflation_adjusted_future_value: money(result.inflation_adjusted_future_value),
        total_contributions: money(result.total_contributions),
        total_gain: money(result.total_gain),
    };
    ProjectResponse {
        lang: locale,
        lang_code: locale.lang_code(),
        currency_code: locale.currency_code(),
        input,
        result,
        formatted,
    }
}
