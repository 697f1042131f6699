//! Configuration structures for the statement pipeline.

use serde::{Deserialize, Serialize};

use crate::statement::scanner::MAX_TRANSACTIONS;

/// Main configuration for the cardstmt pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Statement extraction configuration.
    pub extraction: ExtractionConfig,

    /// Upload filtering configuration.
    pub upload: UploadConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try an empty password on encrypted PDFs before giving up.
    pub decrypt_with_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_with_empty_password: true,
        }
    }
}

/// Statement extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of transactions returned per statement, at most 10.
    pub max_transactions: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_transactions: MAX_TRANSACTIONS,
        }
    }
}

/// Upload filtering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Accepted file extensions (lowercase, without the dot).
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: vec!["pdf".to_string()],
        }
    }
}

impl UploadConfig {
    /// Whether a file name carries one of the accepted extensions.
    pub fn accepts(&self, filename: &str) -> bool {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension {
            Some(ext) => self.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(&ext)),
            None => false,
        }
    }
}

impl StatementConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StatementConfig::default();
        assert!(config.pdf.decrypt_with_empty_password);
        assert_eq!(config.extraction.max_transactions, 10);
        assert_eq!(config.upload.allowed_extensions, vec!["pdf".to_string()]);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: StatementConfig =
            serde_json::from_str(r#"{"extraction": {"max_transactions": 5}}"#).unwrap();
        assert_eq!(config.extraction.max_transactions, 5);
        assert!(config.pdf.decrypt_with_empty_password);
    }

    #[test]
    fn test_upload_accepts() {
        let upload = UploadConfig::default();
        assert!(upload.accepts("statement.pdf"));
        assert!(upload.accepts("STATEMENT.PDF"));
        assert!(!upload.accepts("statement.png"));
        assert!(!upload.accepts("statement"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = StatementConfig::default();
        config.extraction.max_transactions = 3;
        config.save(&path).unwrap();

        let loaded = StatementConfig::from_file(&path).unwrap();
        assert_eq!(loaded.extraction.max_transactions, 3);
    }
}
