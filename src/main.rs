//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; the session is driven by the TUI input port.

use dotenv::dotenv;
use matrisense::adapters::auth::StaticCredentials;
use matrisense::adapters::persistence::{MemoryRecordStore, RecordJson};
use matrisense::adapters::report::PdfReportRenderer;
use matrisense::adapters::ui::tui::TuiInputPort;
use matrisense::ports::{AuthPort, InputPort, RecordStore, ReportRenderer};
use matrisense::shared::config::AppConfig;
use matrisense::usecases::{AssessmentService, AuthService, ChatService, ReportService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    matrisense::adapters::ui::init_ui();

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("{}", e))?;

    // --- Login gate ---
    if cfg.login_email.is_none() || cfg.login_password.is_none() {
        info!("no MATRISENSE_LOGIN_EMAIL/PASSWORD set, demo credentials are active");
    }
    let auth_port: Arc<dyn AuthPort> = Arc::new(StaticCredentials::new(
        cfg.login_email_or_default(),
        cfg.login_password_or_default(),
    ));
    let auth_service = Arc::new(AuthService::new(auth_port, cfg.login_attempts_or_default()));

    // --- Record store: JSON file when persistence is on, memory otherwise ---
    let store: Arc<dyn RecordStore> = if cfg.is_persistence_enabled() {
        let path = cfg.record_path();
        info!(path = %path.display(), "persisting latest assessment");
        let json = RecordJson::new(&path);
        json.load()
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        Arc::new(json)
    } else {
        Arc::new(MemoryRecordStore::new())
    };
    let assessment_service = Arc::new(AssessmentService::new(store));

    // --- Chat ---
    let chat_delay_ms = cfg.chat_delay_ms_or_default();
    info!(chat_delay_ms, "MatriBot reply delay: {} ms", chat_delay_ms);
    let chat_service = Arc::new(ChatService::new(Duration::from_millis(chat_delay_ms)));

    // --- Reports ---
    let reports_dir = cfg.reports_dir_or_default();
    info!(path = %reports_dir.display(), "reports directory");
    let renderer: Arc<dyn ReportRenderer> = Arc::new(PdfReportRenderer::new());
    let report_service = Arc::new(ReportService::new(renderer, reports_dir));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        auth_service,
        assessment_service,
        chat_service,
        report_service,
    ));

    // --- Run (login -> main menu) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
