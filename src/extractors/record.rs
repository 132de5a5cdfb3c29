// src/extractors/record.rs
use crate::extractors::registry::StandardBody;
use serde::Serialize;

/// Deterministic portion of a document's extracted metadata.
///
/// The scanned fields are always populated: an extractor that finds
/// nothing writes its sentinel ("Unknown", or the code-specific
/// not-found marker), never leaves a hole. The three registry-policy
/// fields are `None` when the classified standard body has no entry,
/// and are omitted from the serialized record rather than padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    pub standard_body: StandardBody,
    pub protocol_name: String,
    pub protocol_version: String,
    pub release_date: String,
    pub protocol_code: String,
    pub emission_type: String,
    pub geographical_applicability: String,
    pub additionality_requirements: Option<String>,
    pub crediting_period: Option<String>,
    pub project_longevity: Option<String>,
}

impl MetadataRecord {
    /// Ordered (label, value) view used for printing and serialization.
    /// Absent policy fields are skipped, not rendered as placeholders.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("Publishing Standard Body", self.standard_body.name().to_string()),
            ("Protocol Name", self.protocol_name.clone()),
            ("Protocol Version", self.protocol_version.clone()),
            ("Release Date", self.release_date.clone()),
            ("Protocol Code", self.protocol_code.clone()),
            ("GHG Emission Type", self.emission_type.clone()),
            (
                "Geographical Applicability",
                self.geographical_applicability.clone(),
            ),
        ];

        if let Some(text) = &self.additionality_requirements {
            entries.push(("Additionality Requirements", text.clone()));
        }
        if let Some(text) = &self.crediting_period {
            entries.push(("Crediting Period", text.clone()));
        }
        if let Some(text) = &self.project_longevity {
            entries.push(("Project Longevity", text.clone()));
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: StandardBody) -> MetadataRecord {
        MetadataRecord {
            standard_body: body,
            protocol_name: "Test Methodology".to_string(),
            protocol_version: "Version 1.0".to_string(),
            release_date: "2020-01-01".to_string(),
            protocol_code: "VM0001".to_string(),
            emission_type: "Reduction".to_string(),
            geographical_applicability: "Global".to_string(),
            additionality_requirements: None,
            crediting_period: None,
            project_longevity: None,
        }
    }

    #[test]
    fn test_scanned_fields_always_present() {
        let entries = record(StandardBody::Unknown).entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].0, "Publishing Standard Body");
        assert_eq!(entries[0].1, "Unknown");
    }

    #[test]
    fn test_absent_policy_fields_are_omitted() {
        let entries = record(StandardBody::Unknown).entries();
        assert!(entries
            .iter()
            .all(|(label, _)| *label != "Additionality Requirements"));
        assert!(entries.iter().all(|(label, _)| *label != "Crediting Period"));
        assert!(entries.iter().all(|(label, _)| *label != "Project Longevity"));
    }

    #[test]
    fn test_present_policy_fields_follow_scanned_fields() {
        let mut r = record(StandardBody::ClimateActionReserve);
        r.project_longevity = Some("100 years".to_string());
        let entries = r.entries();
        assert_eq!(entries.last().unwrap(), &("Project Longevity", "100 years".to_string()));
    }
}
