pub mod recipient;
pub mod recipient_loader;

#[cfg(test)]
mod test {
    use crate::{
        recipient::{
            recipient::{Recipient, RecipientError},
            recipient_loader::RecipientLoader,
        },
        utils::error::DoveError,
    };

    fn emails(recipients: &[Recipient]) -> Vec<&str> {
        recipients.iter().map(Recipient::email).collect()
    }

    #[test]
    fn invalid_rows_are_dropped_in_order() {
        let csv = "name,email,salutation\n\
                   Jo,jo@x.com,Hi\n\
                   Bad,not-an-email,Hi\n\
                   Ann,ann@example.org,Dear\n\
                   Empty,,Hello\n\
                   Max,max@sub.example.co.uk,Hey\n";

        let recipients = RecipientLoader::load(csv.as_bytes());
        assert_eq!(emails(&recipients), vec!["jo@x.com", "ann@example.org", "max@sub.example.co.uk"]);
        assert_eq!(recipients[1].name(), "Ann");
        assert_eq!(recipients[1].salutation(), "Dear");
    }

    #[test]
    fn fields_are_trimmed() {
        let csv = "name,email,salutation\n  Jo , jo@x.com ,  Hi \n";
        let recipients = RecipientLoader::load(csv.as_bytes());
        assert_eq!(recipients, vec![Recipient::new("Jo", "jo@x.com", "Hi").unwrap()]);
    }

    #[test]
    fn columns_may_come_in_any_order() {
        let csv = "salutation,email,name\nHi,jo@x.com,Jo\n";
        let recipients = RecipientLoader::load(csv.as_bytes());
        assert_eq!(recipients[0].name(), "Jo");
        assert_eq!(recipients[0].salutation(), "Hi");
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let csv = "name,email,salutation\nJo,jo@x.com\nAnn,ann@example.org,Dear\n";
        let recipients = RecipientLoader::load(csv.as_bytes());
        assert_eq!(emails(&recipients), vec!["ann@example.org"]);
    }

    #[test]
    fn missing_column_yields_no_recipients() {
        let csv = "name,email\nJo,jo@x.com\n";
        assert!(RecipientLoader::load(csv.as_bytes()).is_empty());
    }

    #[test]
    fn empty_source_yields_no_recipients() {
        assert!(RecipientLoader::load("".as_bytes()).is_empty());
        assert!(RecipientLoader::load("name,email,salutation\n".as_bytes()).is_empty());
    }

    #[test]
    fn invalid_email_message() {
        let err = Recipient::new("Bad", "not-an-email", "Hi").unwrap_err();
        assert_eq!(err, RecipientError::InvalidEmail { email: "not-an-email".to_string(), name: "Bad".to_string() });
        assert_eq!(err.to_string(), "Invalid email address: not-an-email for Bad");
    }

    #[test]
    fn address_syntax() {
        for valid in ["jo@x.com", "first.last+tag@example.org", "x@mail.example.net"] {
            assert!(Recipient::new("n", valid, "s").is_ok(), "{} should be valid", valid);
        }
        for invalid in ["", "jo", "@x.com", "jo@"] {
            assert!(Recipient::new("n", invalid, "s").is_err(), "{} should be invalid", invalid);
        }
    }

    #[tokio::test]
    async fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipients.csv");
        std::fs::write(&path, "name,email,salutation\nJo,jo@x.com,Hi\n").unwrap();

        let recipients = RecipientLoader::load_path(&path).await.unwrap();
        assert_eq!(emails(&recipients), vec!["jo@x.com"]);
    }

    #[tokio::test]
    async fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RecipientLoader::load_path(dir.path().join("nope.csv")).await;
        assert!(matches!(result, Err(DoveError::MissingFile(_))));
    }
}
