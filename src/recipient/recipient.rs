use lettre::Address;
use thiserror::Error;

/// A row from the recipient list whose email address passed syntax validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    name: String,
    email: String,
    salutation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipientError {
    #[error("Invalid email address: {email} for {name}")]
    InvalidEmail { email: String, name: String },
}

impl Recipient {
    /// Builds a recipient, rejecting addresses without a valid local part and domain.
    pub fn new<T: AsRef<str>>(name: T, email: T, salutation: T) -> Result<Self, RecipientError> {
        let email = email.as_ref().trim();
        if email.parse::<Address>().is_err() {
            return Err(RecipientError::InvalidEmail {
                email: email.to_string(),
                name: name.as_ref().to_string(),
            });
        }

        Ok(Recipient {
            name: name.as_ref().to_string(),
            email: email.to_string(),
            salutation: salutation.as_ref().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn salutation(&self) -> &str {
        &self.salutation
    }
}
