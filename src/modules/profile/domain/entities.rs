//
// ──────────────────────────────────────────────────────────
// Profile Entity
// ──────────────────────────────────────────────────────────
//

/// The single implicit user of the portfolio. Seeded in code; Settings
/// edits produce a transient copy for one response and are never
/// written back.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub full_name: String,
    pub location: String,
    pub university: String,
    /// Degree prefix for the study line, e.g. "BSc".
    pub degree: String,
    pub field_of_study: String,
    pub year_of_study: String,
    pub email: String,
    pub phone: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub about: String,
}

impl Profile {
    /// Study line shown on the Home view, e.g.
    /// "BSc Computer Science, SWE, Year 3".
    pub fn study_line(&self) -> String {
        format!(
            "{} {}, {}",
            self.degree, self.field_of_study, self.year_of_study
        )
    }
}
