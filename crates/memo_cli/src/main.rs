//! Headless driver for the memo client core.
//!
//! # Responsibility
//! - Log in against the configured endpoint and optionally open a category.
//! - Print every emitted snapshot as one JSON line on stdout.
//!
//! Usage: `memo_cli <access_token> [category_id]`

use memo_core::{
    default_log_level, init_logging, AppConfig, CategoryId, LoginOutcome, MemoApp, Snapshot,
    ViewProjector,
};
use std::process::ExitCode;
use std::sync::Arc;

const ENV_LOG_LEVEL: &str = "MEMOAPP_LOG_LEVEL";
const ENV_LOG_DIR: &str = "MEMOAPP_LOG_DIR";

struct JsonLinesProjector;

impl ViewProjector for JsonLinesProjector {
    fn render(&self, snapshot: &Snapshot) {
        match serde_json::to_string(snapshot) {
            Ok(line) => println!("{line}"),
            Err(err) => log::error!("event=render module=cli status=error error=\"{err}\""),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(token) = args.next() else {
        eprintln!("usage: memo_cli <access_token> [category_id]");
        return ExitCode::from(2);
    };
    let category = match args.next().map(|raw| raw.parse::<i64>()) {
        None => None,
        Some(Ok(id)) => Some(CategoryId(id)),
        Some(Err(err)) => {
            eprintln!("category_id must be an integer: {err}");
            return ExitCode::from(2);
        }
    };

    if let Ok(log_dir) = std::env::var(ENV_LOG_DIR) {
        let level =
            std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::from(2);
        }
    };
    let app = match MemoApp::from_config(&config, Arc::new(JsonLinesProjector)) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("cannot start client: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "event=cli_start module=cli status=ok policy={}",
        app.policy().as_str()
    );

    if !app.session().edit_credential(&token) {
        eprintln!("access token is not a valid version-4 identifier");
        return ExitCode::from(2);
    }

    match app.session().login(&token).await {
        LoginOutcome::Active { .. } => {}
        LoginOutcome::Failed => {
            eprintln!("login failed: {}", app.snapshot().last_failure.unwrap_or_default());
            return ExitCode::FAILURE;
        }
        LoginOutcome::Rejected | LoginOutcome::AlreadyStarted => return ExitCode::FAILURE,
    }

    if let Some(category_id) = category {
        app.navigation().toggle_category(category_id).await;
    }

    ExitCode::SUCCESS
}
