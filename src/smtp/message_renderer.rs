use pulldown_cmark::{Options, Parser, html};

use crate::{recipient::recipient::Recipient, smtp::smtp_message::SmtpMessage};

/// Turns markdown into one HTML email per recipient.
pub struct MessageRenderer;

impl MessageRenderer {
    /// The body is the greeting `"<salutation> <name>"`, two newlines, then the
    /// markdown rendered as HTML. No I/O, same input gives the same output.
    pub fn render(body_markup: &str, subject: &str, recipient: &Recipient, sender: &str) -> SmtpMessage {
        let mut body = format!("{} {}\n\n", escape(recipient.salutation()), escape(recipient.name()));
        html::push_html(&mut body, Parser::new_ext(body_markup, Self::options()));

        SmtpMessage::new()
            .with_from(sender)
            .with_to(recipient.email())
            .with_subject(subject)
            .with_body(body)
    }

    fn options() -> Options {
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
