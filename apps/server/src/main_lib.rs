use std::sync::Arc;

use crate::config::Config;
use roi_core::submissions::{SubmissionService, SubmissionServiceTrait};
use roi_mailer::MailRelayClient;
use roi_storage_sqlite::{
    db::{self, write_actor},
    submissions::SubmissionRepository,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub struct AppState {
    pub submission_service: Arc<dyn SubmissionServiceTrait>,
}

impl AppState {
    pub fn new(submission_service: Arc<dyn SubmissionServiceTrait>) -> Arc<Self> {
        Arc::new(Self { submission_service })
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("ROI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone())?;
    let repository = Arc::new(SubmissionRepository::new(pool, writer));

    tracing::info!("Mail relay endpoint: {}", config.mail_relay.endpoint);
    let mail_transport = Arc::new(MailRelayClient::new(config.mail_relay.clone())?);

    let submission_service = Arc::new(SubmissionService::new(
        mail_transport,
        repository,
        config.report_recipient.clone(),
    ));

    Ok(AppState::new(submission_service))
}
