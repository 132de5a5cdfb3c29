// src/report/mod.rs
use crate::enrichment::sectionizer::EnrichmentRecord;
use crate::extractors::record::MetadataRecord;

/// One document's assembled output: the deterministic record plus
/// whatever the enrichment pass produced (None when enrichment was
/// skipped or unavailable).
#[derive(Debug, Clone)]
pub struct ProtocolReport {
    pub metadata: MetadataRecord,
    pub enrichment: Option<EnrichmentRecord>,
}

impl ProtocolReport {
    pub fn new(metadata: MetadataRecord, enrichment: Option<EnrichmentRecord>) -> Self {
        Self { metadata, enrichment }
    }

    /// Ordered (label, text) pairs for printing and serialization.
    ///
    /// Deterministic fields come first, in their fixed order, then
    /// enrichment sections in canonical order. On a label collision the
    /// deterministic value wins; a policy field the registry left
    /// absent does not shadow an enrichment section with the same
    /// label, so the enrichment text fills the gap.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = self.metadata.entries();

        if let Some(enrichment) = &self.enrichment {
            for (label, text) in enrichment.entries() {
                if entries.iter().any(|(existing, _)| *existing == label) {
                    tracing::debug!("Deterministic value takes precedence for '{}'", label);
                    continue;
                }
                entries.push((label, text.to_string()));
            }
        }

        entries
    }
}
