use lettre::transport::smtp::{
    authentication::{Credentials, Mechanism},
    client::{AsyncSmtpConnection, TlsParameters},
    extension::ClientId,
};

use crate::smtp::{smtp_credentials::SmtpCredentials, smtp_message::SmtpMessage};

/// Opens sessions to an SMTP server.
#[allow(async_fn_in_trait)]
pub trait SmtpConnector {
    type Session: SmtpSession;

    async fn connect(&self, host: &str, port: u16) -> anyhow::Result<Self::Session>;
}

/// One open connection to an SMTP server.
///
/// `close` is called exactly once by the owner, whatever happened before.
#[allow(async_fn_in_trait)]
pub trait SmtpSession {
    /// Upgrades the connection to TLS.
    async fn starttls(&mut self) -> anyhow::Result<()>;
    async fn login(&mut self, credentials: &SmtpCredentials) -> anyhow::Result<()>;
    async fn send(&mut self, message: &SmtpMessage) -> anyhow::Result<()>;
    async fn close(&mut self);
}

/// Connector speaking SMTP over TCP with lettre.
pub struct LettreConnector {
    hello_name: ClientId,
}

impl LettreConnector {
    pub fn new() -> Self {
        LettreConnector {
            hello_name: ClientId::default(),
        }
    }

    /// Sets the name sent with `EHLO`, defaults to the local hostname.
    pub fn hello_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.hello_name = ClientId::Domain(name.as_ref().to_string());
        self
    }
}

impl SmtpConnector for LettreConnector {
    type Session = LettreSession;

    async fn connect(&self, host: &str, port: u16) -> anyhow::Result<LettreSession> {
        let connection = AsyncSmtpConnection::connect_tokio1((host, port), None, &self.hello_name, None, None).await?;
        Ok(LettreSession {
            connection,
            host: host.to_string(),
            hello_name: self.hello_name.clone(),
        })
    }
}

pub struct LettreSession {
    connection: AsyncSmtpConnection,
    host: String,
    hello_name: ClientId,
}

impl SmtpSession for LettreSession {
    async fn starttls(&mut self) -> anyhow::Result<()> {
        if !self.connection.can_starttls() {
            return Err(anyhow::anyhow!("{} does not offer STARTTLS", self.host));
        }

        let tls_parameters = TlsParameters::new(self.host.clone())?;
        self.connection.starttls(tls_parameters, &self.hello_name).await?;
        Ok(())
    }

    async fn login(&mut self, credentials: &SmtpCredentials) -> anyhow::Result<()> {
        self.connection.auth(&[Mechanism::Plain, Mechanism::Login], &Credentials::from(credentials)).await?;
        Ok(())
    }

    async fn send(&mut self, message: &SmtpMessage) -> anyhow::Result<()> {
        let message = message.build()?;
        self.connection.send(message.envelope(), &message.formatted()).await?;
        Ok(())
    }

    async fn close(&mut self) {
        if let Err(err) = self.connection.quit().await {
            tracing::warn!("QUIT to {} failed: {}", self.host, err);
        }
    }
}
