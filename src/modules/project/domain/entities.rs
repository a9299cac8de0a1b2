//
// ──────────────────────────────────────────────────────────
// Project Entities
// ──────────────────────────────────────────────────────────
//

/// Closed category tag for a project. The display label and the
/// Dissertation filter key off this tag rather than matching text
/// inside a free-form category string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Individual,
    Group,
    Internship,
    Dissertation,
}

impl ProjectKind {
    pub fn label(self) -> &'static str {
        match self {
            ProjectKind::Individual => "Individual Project",
            ProjectKind::Group => "Group Project",
            ProjectKind::Internship => "Internship Project",
            ProjectKind::Dissertation => "Dissertation Project",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    /// Academic year the project belongs to, 1 through 3.
    pub year: u8,
    pub kind: ProjectKind,
    pub is_group: bool,
    pub description: String,
    pub link: Option<String>,
}

impl Project {
    /// Category line shown on the project card, e.g.
    /// "Year 2, Individual Project".
    pub fn category_label(&self) -> String {
        format!("Year {}, {}", self.year, self.kind.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_label_is_derived_from_year_and_kind() {
        let project = Project {
            title: "Data Analysis Project".to_string(),
            year: 2,
            kind: ProjectKind::Individual,
            is_group: false,
            description: String::new(),
            link: None,
        };

        assert_eq!(project.category_label(), "Year 2, Individual Project");
    }

    #[test]
    fn every_kind_has_a_label() {
        assert_eq!(ProjectKind::Group.label(), "Group Project");
        assert_eq!(ProjectKind::Internship.label(), "Internship Project");
        assert_eq!(ProjectKind::Dissertation.label(), "Dissertation Project");
    }
}
