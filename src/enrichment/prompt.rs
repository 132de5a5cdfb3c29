// src/enrichment/prompt.rs

/// Delimiter the model is instructed to place between sections; the
/// sectionizer splits on the same token.
pub const SECTION_DELIMITER: &str = "###";

/// The eight sections requested from the completion model.
///
/// Declaration order is fixed policy: it is the matching priority in
/// the sectionizer and the presentation order of enrichment entries in
/// the merged report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ProjectSummary,
    ProjectActivities,
    GeographicalApplicability,
    AdditionalityRequirements,
    CreditingPeriod,
    ProjectLongevity,
    BaselineMethodology,
    ProtocolType,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::ProjectSummary,
        Section::ProjectActivities,
        Section::GeographicalApplicability,
        Section::AdditionalityRequirements,
        Section::CreditingPeriod,
        Section::ProjectLongevity,
        Section::BaselineMethodology,
        Section::ProtocolType,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::ProjectSummary => "Project Summary",
            Section::ProjectActivities => "Project Activities",
            Section::GeographicalApplicability => "Geographical Applicability",
            Section::AdditionalityRequirements => "Additionality Requirements",
            Section::CreditingPeriod => "Crediting Period",
            Section::ProjectLongevity => "Project Longevity",
            Section::BaselineMethodology => "Baseline Methodology",
            Section::ProtocolType => "Protocol Type (Taxonomy)",
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            Section::ProjectSummary => {
                "a concise summary of the project type this methodology covers"
            }
            Section::ProjectActivities => {
                "the activities a project carries out under this methodology"
            }
            Section::GeographicalApplicability => {
                "where projects under this methodology can be located"
            }
            Section::AdditionalityRequirements => {
                "how the methodology requires additionality to be demonstrated"
            }
            Section::CreditingPeriod => {
                "the crediting period rules, including renewals and any overall cap"
            }
            Section::ProjectLongevity => {
                "the minimum required operational duration of a project"
            }
            Section::BaselineMethodology => {
                "how the baseline scenario is established and quantified"
            }
            Section::ProtocolType => {
                "the protocol type within a standard carbon-offset taxonomy"
            }
        }
    }
}

/// Builds the single enrichment prompt sent to the completion service.
///
/// 1. Instruction block naming the eight sections and the delimiter
///    convention.
/// 2. One line per section: delimiter, label, what to write.
/// 3. The full document text appended verbatim between fences.
pub fn build_enrichment_prompt(document_text: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You will be given the full text of a carbon-offset methodology document.\n",
    );
    prompt.push_str(&format!(
        "Respond with exactly the following sections, in order, separating each section \
         with the delimiter \"{}\". Begin every section with its label.\n\n",
        SECTION_DELIMITER
    ));

    for section in Section::ALL {
        prompt.push_str(&format!(
            "{} {}: {}\n",
            SECTION_DELIMITER,
            section.label(),
            section.instruction()
        ));
    }

    prompt.push_str("\nDocument text:\n---\n");
    prompt.push_str(document_text);
    prompt.push_str("\n---\n");

    prompt
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_every_section() {
        let prompt = build_enrichment_prompt("document body");
        for section in Section::ALL {
            assert!(
                prompt.contains(section.label()),
                "prompt missing label '{}'",
                section.label()
            );
        }
    }

    #[test]
    fn test_prompt_appends_document_verbatim() {
        let text = "VM0042 Improved Agricultural Land Management";
        assert!(build_enrichment_prompt(text).contains(text));
    }

    #[test]
    fn test_prompt_states_delimiter_convention() {
        assert!(build_enrichment_prompt("x").contains(SECTION_DELIMITER));
    }

    #[test]
    fn test_no_label_is_a_substring_of_another() {
        // The sectionizer matches labels by containment; a label nested
        // inside another would make binding order-dependent.
        for a in Section::ALL {
            for b in Section::ALL {
                if a != b {
                    assert!(
                        !a.label().contains(b.label()),
                        "label '{}' contains label '{}'",
                        a.label(),
                        b.label()
                    );
                }
            }
        }
    }
}
