use crate::{
    adapters::{email::emailjs::EmailJsSender, http::app_state::AppState},
    infra::{config::AppConfig, error::InfraError, http_client, mongo_persistence},
    use_cases::waitlist::{VerificationEmailSender, WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let mongo_arc = Arc::new(mongo_persistence(&config).await?);

    let client = http_client::try_build_client().map_err(InfraError::HttpClient)?;
    let email = Arc::new(
        EmailJsSender::new(
            client,
            &config.emailjs_api_url,
            config.emailjs_service_id.clone(),
            config.emailjs_template_id.clone(),
            config.emailjs_public_key.clone(),
            config.emailjs_private_key.clone(),
        )
        .map_err(InfraError::EmailApiUrl)?,
    );

    let waitlist_use_cases = WaitlistUseCases::new(
        mongo_arc as Arc<dyn WaitlistRepo>,
        email as Arc<dyn VerificationEmailSender>,
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when LOG_FILE is set
    let json_layer = log_file.and_then(|path| match File::create(path) {
        Ok(file) => Some(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true),
        ),
        Err(err) => {
            eprintln!("cannot create log file {path}: {err}");
            None
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
