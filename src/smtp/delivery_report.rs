use crate::{recipient::recipient::Recipient, smtp::delivery_error::DeliveryError};

/// Outcome of one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Recipients whose message was accepted, in send order.
    pub sent: Vec<Recipient>,
    /// The recipient whose send failed and ended the batch.
    pub failed_at: Option<Recipient>,
    pub error: Option<DeliveryError>,
    /// Recipients never attempted because the batch stopped early.
    pub skipped: usize,
}

impl DeliveryReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
