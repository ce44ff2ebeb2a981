use anyhow::{Context, Result};
use heartcare_client::{ApiClient, ApiConfig};
use heartcare_model::{
    DataSource, FeatureImportance, PatientField, PatientInput, dashboard_charts,
};
use tracing::{info, trace, warn};

use heartcare_cli::input::{read_patient_file, require_complete};
use heartcare_cli::logging::redact_value;
use heartcare_cli::render::{
    chart_heading, chart_table, importance_heading, importance_table, prediction_report,
    statistics_table,
};

use crate::cli::{Cli, PredictArgs};

/// Builds the client: defaults, then environment, then command-line flags.
pub fn build_client(cli: &Cli) -> Result<ApiClient> {
    let mut config = ApiConfig::default()
        .apply_env()
        .context("read backend settings from the environment")?;
    if let Some(url) = &cli.api_url {
        config.base_url.clone_from(url);
    }
    if let Some(secs) = cli.timeout {
        config.timeout_secs = secs;
    }
    info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "backend configured");
    ApiClient::new(&config).context("configure backend client")
}

pub async fn run_stats(client: &ApiClient) -> Result<()> {
    let stats = client.statistics().await.context("fetch statistics")?;
    println!("{}", statistics_table(&stats));
    Ok(())
}

/// Feature importance, or the built-in weights when the backend fails.
async fn load_importance(client: &ApiClient) -> (FeatureImportance, DataSource) {
    match client.feature_importance().await {
        Ok(importance) => (importance, DataSource::Live),
        Err(error) => {
            warn!(%error, "feature importance unavailable, using default weights");
            (FeatureImportance::fallback(), DataSource::Fallback)
        }
    }
}

pub async fn run_importance(client: &ApiClient) -> Result<()> {
    let (importance, source) = load_importance(client).await;
    println!("{}", importance_heading(source));
    println!("{}", importance_table(&importance));
    Ok(())
}

#[tracing::instrument(name = "dashboard", skip_all)]
pub async fn run_dashboard(client: &ApiClient) -> Result<()> {
    let stats = match client.statistics().await {
        Ok(stats) => {
            println!("{}\n", statistics_table(&stats));
            Some(stats)
        }
        Err(error) => {
            warn!(%error, "statistics unavailable");
            None
        }
    };
    let (importance, source) = load_importance(client).await;

    for spec in dashboard_charts(stats.as_ref(), &importance, source) {
        println!("{}", chart_heading(&spec));
        println!("{}\n", chart_table(&spec));
    }
    Ok(())
}

fn patient_input(args: &PredictArgs) -> Result<PatientInput> {
    let base = match &args.input {
        Some(path) => read_patient_file(path)?,
        None => PatientInput::default(),
    };
    let input = args.apply_flags(base);
    require_complete(&input)?;
    Ok(input)
}

pub async fn run_predict(client: &ApiClient, args: &PredictArgs) -> Result<()> {
    let input = patient_input(args)?;
    for field in PatientField::ALL {
        trace!(field = field.id(), value = redact_value(input.get(field)), "patient value");
    }

    let result = client.predict(&input).await.context("request prediction")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", prediction_report(&result));
    }
    Ok(())
}
