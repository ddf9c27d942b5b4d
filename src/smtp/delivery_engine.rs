use std::panic::AssertUnwindSafe;

use anyhow::Context;
use futures::FutureExt;

use crate::{
    config::mail_config::Config,
    recipient::recipient::Recipient,
    smtp::{
        delivery_error::DeliveryError,
        delivery_report::DeliveryReport,
        message_renderer::MessageRenderer,
        smtp_credentials::SmtpCredentials,
        smtp_session::{LettreConnector, SmtpConnector, SmtpSession},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Connected,
    Authenticated,
    Sending,
    Closed,
}

/// Sends one batch over a single authenticated session.
pub struct DeliveryEngine<C> {
    connector: C,
}

struct Batch<'a> {
    recipients: &'a [Recipient],
    redirect_to: Option<&'a str>,
    body_markup: &'a str,
    subject: &'a str,
    config: &'a Config,
}

impl DeliveryEngine<LettreConnector> {
    /// Engine delivering over a real SMTP connection.
    pub fn smtp() -> Self {
        DeliveryEngine::new(LettreConnector::new())
    }
}

impl<C: SmtpConnector> DeliveryEngine<C> {
    pub fn new(connector: C) -> Self {
        DeliveryEngine { connector }
    }

    /// Renders and sends one message per recipient, in order.
    ///
    /// The session is opened and authenticated once, even for an empty list, and
    /// closed exactly once on every path. Between two sends the engine waits
    /// `smtp.throttle`. The first failed send ends the batch, the recipients after
    /// it are counted as skipped.
    pub async fn deliver(&self, recipients: &[Recipient], body_markup: &str, config: &Config, subject: &str) -> DeliveryReport {
        let batch = Batch {
            recipients,
            redirect_to: None,
            body_markup,
            subject,
            config,
        };
        self.run(batch).await
    }

    /// Renders the message for the first recipient and sends it to `mail.test_email` only.
    pub async fn deliver_test(&self, recipients: &[Recipient], body_markup: &str, config: &Config, subject: &str) -> DeliveryReport {
        let batch = Batch {
            recipients: &recipients[..recipients.len().min(1)],
            redirect_to: Some(config.mail.test_email.as_str()),
            body_markup,
            subject,
            config,
        };
        self.run(batch).await
    }

    async fn run(&self, batch: Batch<'_>) -> DeliveryReport {
        let mut report = DeliveryReport::default();
        let mut state = SessionState::Idle;
        let (host, port) = (batch.config.smtp.host.as_str(), batch.config.smtp.port);

        let mut session = match self.connector.connect(host, port).await {
            Ok(session) => session,
            Err(err) => {
                let err = DeliveryError::Connection {
                    host: host.to_string(),
                    port,
                    reason: format!("{:#}", err),
                };
                tracing::error!("{}", err);
                report.skipped = batch.recipients.len();
                report.error = Some(err);
                return report;
            }
        };
        transition(&mut state, SessionState::Connected);

        let outcome = AssertUnwindSafe(send_all(&mut session, &mut state, &mut report, &batch)).catch_unwind().await;

        session.close().await;
        transition(&mut state, SessionState::Closed);

        if let Err(panic) = outcome {
            std::panic::resume_unwind(panic);
        }
        report
    }
}

async fn send_all<S: SmtpSession>(session: &mut S, state: &mut SessionState, report: &mut DeliveryReport, batch: &Batch<'_>) {
    let smtp = &batch.config.smtp;
    let credentials = SmtpCredentials::new(&smtp.username, &smtp.password);

    if let Err(err) = authenticate(session, &credentials).await {
        let err = DeliveryError::Authentication(format!("{:#}", err));
        tracing::error!("{}", err);
        report.skipped = batch.recipients.len();
        report.error = Some(err);
        return;
    }
    transition(state, SessionState::Authenticated);
    transition(state, SessionState::Sending);

    let throttle = smtp.throttle();
    for (index, recipient) in batch.recipients.iter().enumerate() {
        if index > 0 && !throttle.is_zero() {
            tokio::time::sleep(throttle).await;
        }

        let mut message = MessageRenderer::render(batch.body_markup, batch.subject, recipient, &batch.config.mail.from);
        if let Some(address) = batch.redirect_to {
            message.to = address.to_string();
        }

        match session.send(&message).await {
            Ok(()) => {
                tracing::info!("Sent email to {} ({})", recipient.name(), message.to);
                report.sent.push(recipient.clone());
            }
            Err(err) => {
                let err = DeliveryError::Transport {
                    name: recipient.name().to_string(),
                    email: message.to.clone(),
                    reason: format!("{:#}", err),
                };
                tracing::error!("{}", err);
                report.failed_at = Some(recipient.clone());
                report.error = Some(err);
                report.skipped = batch.recipients.len() - index - 1;
                return;
            }
        }
    }
}

async fn authenticate<S: SmtpSession>(session: &mut S, credentials: &SmtpCredentials) -> anyhow::Result<()> {
    session.starttls().await.context("STARTTLS negotiation failed")?;
    session.login(credentials).await.with_context(|| format!("login as {} rejected", credentials.user))?;
    Ok(())
}

fn transition(state: &mut SessionState, next: SessionState) {
    tracing::debug!("session {:?} -> {:?}", state, next);
    *state = next;
}
