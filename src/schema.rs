//! Survey Column Contract
//! Fixed mapping between Qualtrics export identifiers and display labels.
//!
//! The identifiers were confirmed against the December 2025 export: the
//! questionnaire draft numbered the employment question Q25 and the program
//! question Q57, but the export carries them as Q47 and Q58. Q44 holds the
//! earnings-belief answer for enrolled MAcc/MBA students. This table is the
//! authoritative contract; nothing else in the crate names a raw identifier.

/// Fixed input filename of the survey export.
pub const INPUT_FILE: &str = "Alternative CPA Pathways Survey_December 31, 2025_09.45.csv";

/// "Do you currently work in a CPA firm?" (Yes/No).
pub const EMPLOYMENT_FIELD: &str = "Q47";
pub const EMPLOYMENT_LABEL: &str = "Work in CPA Firm";

/// Forced-rank benefit questions, rank 1 = most preferred.
pub const RANKING_FIELDS: [(&str, &str); 6] = [
    ("Q24_1", "CPA Exam Preparation"),
    ("Q24_2", "Networking Opportunities"),
    ("Q24_3", "Interaction with Experienced Faculty"),
    ("Q24_4", "Technical Accounting Skills"),
    ("Q24_5", "Soft Skill Development"),
    ("Q24_6", "Internship and Recruitment Opportunities"),
];

/// "Are you enrolled in an MAcc, MBA, or other graduate program?"
pub const PROGRAM_FIELD: &str = "Q58";
pub const PROGRAM_LABEL: &str = "Program Type";

/// Earnings-belief question asked of enrolled MAcc/MBA students.
pub const BELIEF_FIELD: &str = "Q44";
pub const BELIEF_LABEL: &str = "Lifetime Earnings Belief";

/// Program types retained for the earnings-belief cross-tabulation.
pub const PROGRAM_TYPES: [&str; 2] = ["MAcc", "MBA"];

/// Canonical five-point scale, most to least agreement. Responses outside
/// this set are kept but ordered after it.
pub const LIKERT_LEVELS: [&str; 5] = [
    "Definitely yes",
    "Probably yes",
    "Might or might not",
    "Probably not",
    "Definitely not",
];

/// Ranking display labels in schema order.
pub fn ranking_labels() -> Vec<String> {
    RANKING_FIELDS
        .iter()
        .map(|(_, label)| (*label).to_string())
        .collect()
}

/// Raw identifiers every analysis run requires.
pub fn required_fields() -> Vec<&'static str> {
    let mut fields = vec![EMPLOYMENT_FIELD, PROGRAM_FIELD, BELIEF_FIELD];
    fields.extend(RANKING_FIELDS.iter().map(|(id, _)| *id));
    fields
}
