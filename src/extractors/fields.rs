// src/extractors/fields.rs

// --- Imports ---
use crate::document::{DocumentText, CLASSIFIER_PAGE_WINDOW};
use crate::extractors::record::MetadataRecord;
use crate::extractors::registry;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
/// Sentinel for a scanned field whose pattern never matched.
pub const UNKNOWN: &str = "Unknown";
/// Protocol codes get their own marker so "no code printed on the cover"
/// is distinguishable from the generic sentinel.
pub const CODE_NOT_FOUND: &str = "Not found";

// --- Regex Patterns (Lazy Static) ---
static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Version\s+\d+\.\d+").expect("Failed to compile VERSION_RE")
});

static CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"VM\d{4}|ACM\d{4}").expect("Failed to compile CODE_RE")
});

// "12 February 2014"
static DAY_FIRST_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,2}\s+[A-Za-z]+\s+\d{4}").expect("Failed to compile DAY_FIRST_DATE_RE")
});

// "March 19, 2024"
static MONTH_FIRST_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z]+\s+\d{1,2},\s+\d{4}").expect("Failed to compile MONTH_FIRST_DATE_RE")
});

// The protocol name is whatever the cover page prints before the first
// version marker, the word "Protocol", or a release date.
static TITLE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bVersion\b|\bProtocol\b|\d{1,2}\s+[A-Za-z]+\s+\d{4}")
        .expect("Failed to compile TITLE_BOUNDARY_RE")
});

// Case-sensitive on purpose: the capitalized forms are how methodology
// documents name their emission categories; lowercase occurrences are
// ordinary prose.
static EMISSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Reduction(?:s)?|Removal(?:s)?").expect("Failed to compile EMISSION_RE")
});

// --- Region keyword table ---
// Declaration order is also join order in the extracted value.
const REGION_KEYWORDS: &[(&str, &[&str])] = &[
    ("Europe", &["europe", "eu", "european union"]),
    ("USA", &["usa", "united states", "us", "america"]),
    ("Canada", &["canada", "canadian"]),
    ("Global", &["global", "international", "worldwide"]),
    ("Asia", &["asia", "asean", "asian region"]),
];

/// Fallback when no region keyword occurs anywhere in the document: a
/// methodology that names no jurisdiction is treated as applicable
/// worldwide.
pub const GEOGRAPHY_FALLBACK: &str = "Global";

// --- Field extractors (pure text -> value) ---

/// Leading run of cover-page text up to the first title boundary,
/// collapsed to single spaces. "Unknown" when no boundary exists or the
/// run is empty.
pub fn extract_protocol_name(first_page: &str) -> String {
    let Some(boundary) = TITLE_BOUNDARY_RE.find(first_page) else {
        tracing::debug!("No title boundary found on first page");
        return UNKNOWN.to_string();
    };

    let name = first_page[..boundary.start()]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        UNKNOWN.to_string()
    } else {
        name
    }
}

/// First "Version X.Y" marker on the cover page, kept verbatim.
pub fn extract_protocol_version(first_page: &str) -> String {
    VERSION_RE
        .find(first_page)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// First date-like substring on the cover page, re-rendered as
/// YYYY-MM-DD. Both "12 February 2014" and "March 19, 2024" shapes are
/// accepted; when both occur, the one printed earlier wins. A match
/// whose month is not a real month name parses to "Unknown".
pub fn extract_release_date(first_page: &str) -> String {
    let day_first = DAY_FIRST_DATE_RE.find(first_page);
    let month_first = MONTH_FIRST_DATE_RE.find(first_page);

    let (matched, format) = match (day_first, month_first) {
        (Some(d), Some(m)) if d.start() <= m.start() => (d, "%d %B %Y"),
        (_, Some(m)) => (m, "%B %d, %Y"),
        (Some(d), None) => (d, "%d %B %Y"),
        (None, None) => return UNKNOWN.to_string(),
    };

    match NaiveDate::parse_from_str(matched.as_str(), format) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(e) => {
            tracing::debug!("Date-like text '{}' failed to parse: {}", matched.as_str(), e);
            UNKNOWN.to_string()
        }
    }
}

/// First VMxxxx or ACMxxxx identifier on the cover page.
pub fn extract_protocol_code(first_page: &str) -> String {
    CODE_RE
        .find(first_page)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| CODE_NOT_FOUND.to_string())
}

/// Scans the leading-pages window for the emission category tokens and
/// folds them into one of the four category values.
pub fn extract_emission_type(window: &str) -> String {
    let mut has_removal = false;
    let mut has_reduction = false;

    for m in EMISSION_RE.find_iter(window) {
        if m.as_str().starts_with("Removal") {
            has_removal = true;
        } else {
            has_reduction = true;
        }
    }

    match (has_removal, has_reduction) {
        (true, true) => "Removal and Reduction".to_string(),
        (true, false) => "Removal".to_string(),
        (false, true) => "Reduction".to_string(),
        (false, false) => UNKNOWN.to_string(),
    }
}

/// Detects applicable regions by keyword substring over the
/// lowercase-folded full text. USA and Canada together collapse into
/// "North America" (in USA's table position, suppressing both).
pub fn extract_geographical_applicability(full_text: &str) -> String {
    let folded = full_text.to_lowercase();

    let detected: Vec<&str> = REGION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| folded.contains(k)))
        .map(|(region, _)| *region)
        .collect();

    let both_us_and_canada = detected.contains(&"USA") && detected.contains(&"Canada");
    let regions: Vec<&str> = detected
        .into_iter()
        .filter_map(|region| match region {
            "USA" if both_us_and_canada => Some("North America"),
            "Canada" if both_us_and_canada => None,
            other => Some(other),
        })
        .collect();

    if regions.is_empty() {
        GEOGRAPHY_FALLBACK.to_string()
    } else {
        regions.join(", ")
    }
}

// --- Record assembly ---

/// Runs every deterministic extractor over its designated text window.
///
/// The standard body is classified exactly once, from the leading-pages
/// window, and that single value feeds all three policy lookups.
pub fn extract_metadata(doc: &DocumentText) -> MetadataRecord {
    let first_page = doc.first_page();
    let window = doc.first_pages(CLASSIFIER_PAGE_WINDOW);
    let full_text = doc.full_text();

    let standard_body = registry::classify_standard_body(&window);

    MetadataRecord {
        standard_body,
        protocol_name: extract_protocol_name(first_page),
        protocol_version: extract_protocol_version(first_page),
        release_date: extract_release_date(first_page),
        protocol_code: extract_protocol_code(first_page),
        emission_type: extract_emission_type(&window),
        geographical_applicability: extract_geographical_applicability(&full_text),
        additionality_requirements: registry::additionality_requirements(standard_body)
            .map(str::to_string),
        crediting_period: registry::crediting_period(standard_body).map(str::to_string),
        project_longevity: registry::project_longevity(standard_body).map(str::to_string),
    }
}
