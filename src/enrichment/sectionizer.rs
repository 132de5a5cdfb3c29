// src/enrichment/sectionizer.rs
use crate::enrichment::prompt::{Section, SECTION_DELIMITER};

/// Sections recovered from one completion, at most one entry per label.
///
/// A label the model never produced is simply absent; unlike the
/// deterministic record there is no "Unknown" padding here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentRecord {
    sections: Vec<(Section, String)>,
}

impl EnrichmentRecord {
    pub fn get(&self, section: Section) -> Option<&str> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, text)| text.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Entries in canonical section order (not response order), so the
    /// merged report prints deterministically regardless of how the
    /// model ordered its answer.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        Section::ALL
            .iter()
            .filter_map(|s| self.get(*s).map(|text| (s.label(), text)))
            .collect()
    }
}

/// Splits a delimited completion into labeled sections.
///
/// Fragments are tested against the labels by substring containment
/// (the model may prepend bullet markers or spacing before a label),
/// in `Section::ALL` order. The first fragment binding a label wins;
/// later fragments that merely mention the same label text inside
/// unrelated content are ignored. Fragments matching no label are
/// dropped silently - preamble and sign-off boilerplate is expected.
pub fn sectionize(response: &str) -> EnrichmentRecord {
    let mut record = EnrichmentRecord::default();

    for fragment in response.split(SECTION_DELIMITER) {
        let matched = Section::ALL
            .iter()
            .copied()
            .find(|s| fragment.contains(s.label()));

        let Some(section) = matched else {
            tracing::trace!("Dropping fragment with no recognized label: {:?}", fragment.trim());
            continue;
        };

        if record.get(section).is_some() {
            tracing::trace!("Ignoring repeated fragment for label '{}'", section.label());
            continue;
        }

        let body = fragment.replacen(section.label(), "", 1);
        let body = body.trim();
        let body = body.strip_prefix(':').unwrap_or(body).trim();
        let body = body.strip_prefix("- ").unwrap_or(body).trim();

        record.sections.push((section, body.to_string()));
    }

    record
}
