use lettre::{
    Message,
    message::{
        Mailbox,
        header::{self, ContentType},
    },
};

pub const MIME_VERSION: &str = "1.0";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=\"utf-8\"";

/// One personalized email, ready to be handed to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub mime_version: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl SmtpMessage {
    pub fn new() -> Self {
        SmtpMessage {
            from: String::new(),
            to: String::new(),
            subject: String::new(),
            mime_version: MIME_VERSION,
            content_type: CONTENT_TYPE_HTML,
            body: String::new(),
        }
    }

    pub fn with_from<T: AsRef<str>>(mut self, from: T) -> Self {
        self.from = from.as_ref().to_string();
        self
    }

    pub fn with_to<T: AsRef<str>>(mut self, to: T) -> Self {
        self.to = to.as_ref().to_string();
        self
    }

    pub fn with_subject<T: AsRef<str>>(mut self, subject: T) -> Self {
        self.subject = subject.as_ref().to_string();
        self
    }

    pub fn with_body<T: AsRef<str>>(mut self, body: T) -> Self {
        self.body = body.as_ref().to_string();
        self
    }

    /// Builds the wire message. Date and Message-ID are added here, so two builds
    /// of the same message differ in those headers only.
    pub fn build(&self) -> anyhow::Result<Message> {
        let from: Mailbox = self.from.parse()?;
        let to: Mailbox = self.to.parse()?;
        let content_type = ContentType::parse(self.content_type)?;

        Ok(Message::builder()
            .from(from)
            .to(to)
            .subject(&self.subject)
            .header(header::MIME_VERSION_1_0)
            .header(content_type)
            .body(self.body.clone())?)
    }
}
