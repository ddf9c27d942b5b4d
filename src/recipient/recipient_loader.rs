use std::{io::Read, path::Path};

use serde::Deserialize;

use crate::{common::utils, recipient::recipient::Recipient, utils::error::DoveError};

#[derive(Debug, Deserialize)]
struct RecipientRow {
    name: String,
    email: String,
    salutation: String,
}

pub struct RecipientLoader;

impl RecipientLoader {
    /// Reads CSV rows with the columns `name`, `email` and `salutation`.
    ///
    /// Rows with an invalid email address, or rows that cannot be read at all, are
    /// skipped with a warning. The valid rows keep their input order.
    pub fn load<R: Read>(source: R) -> Vec<Recipient> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut recipients = Vec::new();
        for row in reader.deserialize::<RecipientRow>() {
            let row = match row {
                Ok(row) => row,
                Err(err) if err.is_io_error() => {
                    tracing::warn!("Stopped reading recipients: {}", err);
                    break;
                }
                Err(err) => {
                    tracing::warn!("Skipping unreadable recipient row: {}", err);
                    continue;
                }
            };

            match Recipient::new(&row.name, &row.email, &row.salutation) {
                Ok(recipient) => recipients.push(recipient),
                Err(err) => tracing::warn!("{}", err),
            }
        }

        tracing::debug!("Loaded {} recipients", recipients.len());
        recipients
    }

    /// Loads recipients from a CSV file.
    pub async fn load_path<T: AsRef<Path>>(path: T) -> Result<Vec<Recipient>, DoveError> {
        let path = path.as_ref();
        utils::ensure_exists(path)?;
        let bytes = tokio::fs::read(path).await.map_err(|err| DoveError::io(path, err))?;
        Ok(Self::load(bytes.as_slice()))
    }
}
