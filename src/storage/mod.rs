// src/storage/mod.rs
use crate::report::ProtocolReport;
use crate::utils::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves the assembled report as JSON.
    ///
    /// Field order must survive serialization, so the entries go out as
    /// a JSON array of label/value objects rather than an object keyed
    /// by label.
    pub fn save_report(
        &self,
        report: &ProtocolReport,
        stem: &str,
    ) -> Result<PathBuf, StorageError> {
        let filename = format!("{}_metadata.json", stem);
        let file_path = self.base_dir.join(filename);

        let fields: Vec<serde_json::Value> = report
            .entries()
            .into_iter()
            .map(|(label, value)| serde_json::json!({ "label": label, "value": value }))
            .collect();

        let document = serde_json::json!({
            "source": stem,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
            "fields": fields,
        });

        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved report to {}", file_path.display());

        Ok(file_path)
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::record::MetadataRecord;
    use crate::extractors::registry::StandardBody;

    fn sample_report() -> ProtocolReport {
        ProtocolReport::new(
            MetadataRecord {
                standard_body: StandardBody::VerifiedCarbonStandard,
                protocol_name: "Test Methodology".to_string(),
                protocol_version: "Version 1.0".to_string(),
                release_date: "2020-01-01".to_string(),
                protocol_code: "VM0001".to_string(),
                emission_type: "Reduction".to_string(),
                geographical_applicability: "Global".to_string(),
                additionality_requirements: None,
                crediting_period: None,
                project_longevity: None,
            },
            None,
        )
    }

    #[test]
    fn test_save_report_preserves_field_order() {
        let dir = std::env::temp_dir().join(format!("protocol_extractor_test_{}", std::process::id()));
        let storage = StorageManager::new(&dir).unwrap();

        let path = storage.save_report(&sample_report(), "VM0001-test").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();

        let fields = parsed["fields"].as_array().unwrap();
        assert_eq!(fields[0]["label"], "Publishing Standard Body");
        assert_eq!(fields[0]["value"], "Verified Carbon Standard");
        assert_eq!(fields[1]["label"], "Protocol Name");
        assert_eq!(parsed["source"], "VM0001-test");

        fs::remove_dir_all(&dir).ok();
    }
}
