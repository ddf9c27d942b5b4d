pub mod utils;

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use crate::{common::utils, utils::error::DoveError};

    #[test]
    fn expand_path_makes_absolute() {
        let path = utils::expand_path("message.md");
        assert!(path.is_absolute());
        assert!(path.ends_with("message.md"));
    }

    #[test]
    fn expand_path_keeps_absolute_paths() {
        assert_eq!(utils::expand_path("/tmp/recipients.csv"), PathBuf::from("/tmp/recipients.csv"));
    }

    #[test]
    fn expand_path_resolves_home() {
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(utils::expand_path("~/dove/config.yaml"), PathBuf::from(home).join("dove/config.yaml"));
        }
    }

    #[tokio::test]
    async fn read_message_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.md");
        std::fs::write(&path, "# Hello\n\nWorld\n").unwrap();

        assert_eq!(utils::read_message(&path).await.unwrap(), "# Hello\n\nWorld\n");
    }

    #[tokio::test]
    async fn read_message_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = utils::read_message(dir.path().join("message.md")).await;
        assert!(matches!(result, Err(DoveError::MissingFile(_))));
    }
}
