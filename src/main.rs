//! Wiring & DI. Entry point: load config, build adapters, inject into the
//! chat service, run the terminal front end. No business logic here.

use dotenv::dotenv;
use intouch_bot::adapters::profile::{
    ChainedProfileAdapter, JsonFileProfileAdapter, RemoteProfileAdapter, StaticProfileAdapter,
};
use intouch_bot::adapters::translate::{
    DEFAULT_GOOGLE_TRANSLATE_URL, GoogleTranslateAdapter, HttpTranslateAdapter,
    PassthroughTranslator,
};
use intouch_bot::adapters::ui::tui::TerminalChat;
use intouch_bot::ports::{ChatPort, InputPort, ProfilePort, TranslationPort};
use intouch_bot::shared::config::{AppConfig, TranslateProvider};
use intouch_bot::usecases::ChatService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });
    let timeout = Duration::from_secs(cfg.http_timeout_secs_or_default());

    // --- Translation ---
    let translator: Arc<dyn TranslationPort> = match cfg.translate_provider_or_default()? {
        TranslateProvider::Google => {
            let url = cfg
                .translate_url()
                .unwrap_or_else(|| DEFAULT_GOOGLE_TRANSLATE_URL.to_string());
            info!(url = %url, "translation via Google");
            Arc::new(GoogleTranslateAdapter::new(url, timeout)?)
        }
        TranslateProvider::Http => {
            let Some(url) = cfg.translate_url() else {
                anyhow::bail!("Set INTOUCH_TRANSLATE_URL when INTOUCH_TRANSLATE_PROVIDER=http");
            };
            info!(url = %url, "translation via HTTP endpoint");
            Arc::new(HttpTranslateAdapter::new(url, timeout)?)
        }
        TranslateProvider::None => {
            warn!("translation disabled, answering everyone in English");
            Arc::new(PassthroughTranslator::new())
        }
    };

    // --- Profile: file or bundled snapshot, optionally backed by a remote copy ---
    let primary: Arc<dyn ProfilePort> = match cfg.profile_path() {
        Some(path) => {
            info!(path = %path, "profile from file");
            Arc::new(JsonFileProfileAdapter::new(path))
        }
        None => Arc::new(StaticProfileAdapter::embedded()?),
    };
    let profiles: Arc<dyn ProfilePort> = match cfg.profile_url() {
        Some(url) => {
            info!(url = %url, "remote profile fallback enabled");
            Arc::new(ChainedProfileAdapter::new(
                primary,
                Arc::new(RemoteProfileAdapter::new(url, timeout)?),
            ))
        }
        None => primary,
    };

    // Greeting only; a failure here surfaces again on the first question.
    let subject = profiles.fetch_profile().await.ok().and_then(|p| p.name);

    let chat: Arc<dyn ChatPort> = Arc::new(ChatService::new(translator, profiles));

    intouch_bot::adapters::ui::init_ui();
    let input_port: Arc<dyn InputPort> = Arc::new(TerminalChat::new(chat, subject));
    input_port.run().await?;

    Ok(())
}
