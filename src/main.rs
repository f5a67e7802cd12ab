use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use stylist_ai::config::AppConfig;
use stylist_ai::error::AppError;
use stylist_ai::telemetry;
use stylist_ai::workflows::styling::{
    styling_router, EnrichmentReport, JsonTemplateStore, TemplateStylingService,
};
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Stylist Template Orchestrator",
    about = "Run the layering template styling service or enrich a stored collection from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Operate on the stored layering template collection
    Templates {
        #[command(subcommand)]
        command: TemplatesCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum TemplatesCommand {
    /// Derive tucking and buttoning policies for every slot and write them back
    Enrich(EnrichArgs),
}

#[derive(Args, Debug)]
struct EnrichArgs {
    /// Path to the template collection JSON (defaults to APP_TEMPLATES_PATH)
    #[arg(long)]
    path: Option<PathBuf>,
    /// Report what the pass would produce without rewriting the collection
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Templates {
            command: TemplatesCommand::Enrich(args),
        } => run_templates_enrich(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(styling_router())
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "styling template orchestrator ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_templates_enrich(args: EnrichArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let path = args.path.unwrap_or(config.templates.path);

    let store = Arc::new(JsonTemplateStore::new(path.clone()));
    let service = TemplateStylingService::new(store);

    let report = if args.dry_run {
        service.preview()?
    } else {
        service.enrich_all()?
    };

    render_enrichment_report(&report, &path, args.dry_run);
    Ok(())
}

fn render_enrichment_report(report: &EnrichmentReport, path: &std::path::Path, dry_run: bool) {
    if dry_run {
        println!("Template enrichment (dry run, collection untouched)");
    } else {
        println!("Template enrichment");
    }
    println!("Collection: {}", path.display());
    println!(
        "Processed {} template(s), {} slot(s) on {}",
        report.templates, report.slots, report.generated_on
    );

    println!("\nTucking policies");
    for tally in &report.tucking {
        println!("- {}: {} slot(s)", tally.policy, tally.slots);
    }

    println!("\nButtoning policies");
    for tally in &report.buttoning {
        println!("- {}: {} slot(s)", tally.policy, tally.slots);
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[test]
    fn cli_declaration_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn enrich_defaults_to_configured_path() {
        let args = Cli::parse_from(["stylist-ai", "templates", "enrich", "--dry-run"]);
        match args.command {
            Some(Command::Templates {
                command: TemplatesCommand::Enrich(enrich),
            }) => {
                assert!(enrich.dry_run);
                assert!(enrich.path.is_none());
            }
            other => panic!("expected templates enrich, got {other:?}"),
        }
    }
}
