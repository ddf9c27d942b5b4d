use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dove::{
    common::utils,
    config::config_validator::ConfigValidator,
    recipient::recipient_loader::RecipientLoader,
    smtp::delivery_engine::DeliveryEngine,
};
use tracing_subscriber::EnvFilter;

/// A simple bulk mailer.
#[derive(Debug, Parser)]
#[command(name = "dove", version, about)]
struct Args {
    /// Configuration YAML file
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,
    /// Recipients CSV file
    #[arg(short, long, value_name = "FILE")]
    recipients: PathBuf,
    /// Message markdown file
    #[arg(short, long, value_name = "FILE")]
    message: PathBuf,
    /// Send only the first message, to mail.test_email
    #[arg(long)]
    test: bool,
    subject: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config_path = utils::expand_path(&args.config);
    let recipients_path = utils::expand_path(&args.recipients);
    let message_path = utils::expand_path(&args.message);

    for path in [&config_path, &recipients_path, &message_path] {
        utils::ensure_exists(path)?;
    }

    let config = ConfigValidator::load(&config_path).await.context("aborting, configuration rejected")?;
    let recipients = RecipientLoader::load_path(&recipients_path).await?;
    let body_markup = utils::read_message(&message_path).await?;
    tracing::info!("Loaded {} recipients from {}", recipients.len(), recipients_path.display());

    let engine = DeliveryEngine::smtp();
    let report = if args.test {
        engine.deliver_test(&recipients, &body_markup, &config, &args.subject).await
    } else {
        engine.deliver(&recipients, &body_markup, &config, &args.subject).await
    };

    tracing::info!("Batch finished: {} sent, {} skipped", report.sent.len(), report.skipped);
    match report.error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
