use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::{info, warn};

use crate::infra::github::ReqwestClient;
use crate::server::{self, CorsHeaders};
use crate::shared::config::{Overrides, RelayConfig};
use crate::shared::env_var::EnvVars;
use crate::shared::logging::{self, LogFormat};
use crate::submission::SubmissionHandler;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Target repository as owner/repo [env: GITHUB_REPO]
    #[arg(long)]
    pub repo: Option<String>,

    /// GitHub REST API base URL [env: GITHUB_API_URL] [default: https://api.github.com]
    #[arg(long)]
    pub api_url: Option<String>,

    /// Value for Access-Control-Allow-Origin [env: RELAY_ALLOWED_ORIGIN] [default: *]
    #[arg(long)]
    pub allowed_origin: Option<String>,

    /// Address to listen on [env: RELAY_BIND] [default: 127.0.0.1:8787]
    #[arg(long)]
    pub bind: Option<String>,

    /// Log output format [env: RELAY_LOG_FORMAT] [default: text]
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl ServeArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        let env = EnvVars::load();
        logging::init(LogFormat::resolve(self.log_format, &env)?)?;

        let config = RelayConfig::resolve(&env, self.overrides())
            .context("Invalid relay configuration")?;
        info!(
            repo = %config.github.repo,
            api_url = %config.github.api_url,
            bind = %config.bind,
            allowed_origin = ?config.allowed_origin,
            "Configuration loaded"
        );
        if config.allows_any_origin() {
            warn!("CORS allows any origin; set RELAY_ALLOWED_ORIGIN to the front-end's origin");
        }

        let client = ReqwestClient::new(&config.github).context("Failed to build GitHub client")?;
        let handler = SubmissionHandler::new(Arc::new(client));
        let app = server::create_router(handler, CorsHeaders::new(config.allowed_origin));

        server::start_server(app, config.bind)
            .await
            .context("HTTP server failed")?;
        Ok(())
    }

    fn overrides(&self) -> Overrides<'_> {
        Overrides {
            repo: self.repo.as_deref(),
            api_url: self.api_url.as_deref(),
            allowed_origin: self.allowed_origin.as_deref(),
            bind: self.bind.as_deref(),
        }
    }
}
