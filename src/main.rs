use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

mod app;

mod domain {
    pub mod entities {
        pub mod action;
        pub mod agent;
        pub mod appointment;
        pub mod map_usage;
        pub mod medical_center;
        pub mod notification;
        pub mod payment;
        pub mod practitioner;
        pub mod record;
        pub mod request;
        pub mod session;
        pub mod workflow;
    }
    pub mod query {
        pub mod comparator;
        pub mod criteria;
        pub mod engine;
    }
}

mod infra {
    pub mod config {
        pub mod settings;
    }
    pub mod export {
        pub mod csv;
        pub mod sink;
    }
    pub mod map {
        pub mod static_map;
    }
    pub mod mock {
        pub mod agents;
        pub mod catalog;
        pub mod centers;
        pub mod notifications;
        pub mod practitioners;
        pub mod requests;
        pub mod source;
    }
    pub mod payment {
        pub mod simulated;
    }
}

mod platform {
    pub mod desktop {
        pub mod dialogs;
    }
}

mod ui {
    pub mod components {
        pub mod filters;
        pub mod map_panel;
        pub mod notifications;
        pub mod practitioner_profile;
        pub mod table;
    }
    pub mod pages {
        pub mod admin;
        pub mod agents;
        pub mod appointments;
        pub mod dashboard;
        pub mod login;
        pub mod map_usage;
        pub mod new_request;
        pub mod payments;
        pub mod practitioners;
        pub mod request_details;
    }
    pub mod state {
        pub mod app_state;
    }
}

mod usecase {
    pub mod ports {
        pub mod collection;
        pub mod export;
        pub mod identity;
        pub mod payment;
    }
    pub mod services {
        pub mod admin_service;
        pub mod export_service;
        pub mod payment_service;
        pub mod query_service;
        pub mod session_service;
        pub mod workflow_service;
    }
}

use infra::config::settings::AppConfig;

const DEFAULT_LOG_FILTER: &str = "medassist=info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() {
    init_tracing();

    let config = AppConfig::from_env();
    if config.mapbox_token.is_none() {
        tracing::warn!("no map token configured, maps will show a placeholder");
    }
    if let Some(dir) = &config.export_dir {
        tracing::info!(dir = %dir.display(), "exports are written without a save dialog");
    }

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Assistance médicale"),
                )
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "medassist", "medassist")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

#[cfg(test)]
mod tests;
