use serde::Deserialize;

use super::entities::{Project, ProjectKind};

//
// ──────────────────────────────────────────────────────────
// Filter
// ──────────────────────────────────────────────────────────
//

/// The six-way categorical filter over the project list. Deserialized
/// from the `filter` query parameter; an absent parameter means `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ProjectFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "year-1")]
    Year1,
    #[serde(rename = "year-2")]
    Year2,
    #[serde(rename = "year-3")]
    Year3,
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "dissertation")]
    Dissertation,
}

impl ProjectFilter {
    /// Dropdown order on the Projects view.
    pub const ALL_OPTIONS: [ProjectFilter; 6] = [
        ProjectFilter::All,
        ProjectFilter::Year1,
        ProjectFilter::Year2,
        ProjectFilter::Year3,
        ProjectFilter::Group,
        ProjectFilter::Dissertation,
    ];

    /// Value carried in the query string and `<option>` elements.
    pub fn query_value(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Year1 => "year-1",
            ProjectFilter::Year2 => "year-2",
            ProjectFilter::Year3 => "year-3",
            ProjectFilter::Group => "group",
            ProjectFilter::Dissertation => "dissertation",
        }
    }

    /// Human label shown in the filter dropdown.
    pub fn display_label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Year1 => "Year 1 Projects",
            ProjectFilter::Year2 => "Year 2 Projects",
            ProjectFilter::Year3 => "Year 3 Projects",
            ProjectFilter::Group => "Group Projects",
            ProjectFilter::Dissertation => "Dissertation",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Year1 => project.year == 1,
            ProjectFilter::Year2 => project.year == 2,
            ProjectFilter::Year3 => project.year == 3,
            ProjectFilter::Group => project.is_group,
            ProjectFilter::Dissertation => project.kind == ProjectKind::Dissertation,
        }
    }
}

/// Ordered sub-sequence of `projects` matching `filter`. Authored order
/// is preserved; the input is never reordered or mutated.
pub fn filter_projects(filter: ProjectFilter, projects: &[Project]) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, year: u8, kind: ProjectKind, is_group: bool) -> Project {
        Project {
            title: title.to_string(),
            year,
            kind,
            is_group,
            description: String::new(),
            link: None,
        }
    }

    fn fixture() -> Vec<Project> {
        vec![
            project("alpha", 1, ProjectKind::Individual, false),
            project("beta", 2, ProjectKind::Internship, false),
            project("gamma", 3, ProjectKind::Group, true),
            project("delta", 3, ProjectKind::Dissertation, false),
        ]
    }

    #[test]
    fn all_returns_the_full_list_unchanged() {
        let projects = fixture();
        let filtered = filter_projects(ProjectFilter::All, &projects);
        assert_eq!(filtered, projects);
    }

    #[test]
    fn year_filters_match_on_the_numeric_year() {
        let projects = fixture();

        let year1 = filter_projects(ProjectFilter::Year1, &projects);
        assert_eq!(year1.len(), 1);
        assert_eq!(year1[0].title, "alpha");

        let year3 = filter_projects(ProjectFilter::Year3, &projects);
        let titles: Vec<&str> = year3.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["gamma", "delta"]);
    }

    #[test]
    fn group_filter_matches_the_group_flag() {
        let projects = fixture();
        let filtered = filter_projects(ProjectFilter::Group, &projects);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "gamma");
    }

    #[test]
    fn dissertation_filter_matches_the_kind_tag() {
        let projects = fixture();
        let filtered = filter_projects(ProjectFilter::Dissertation, &projects);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "delta");
    }

    #[test]
    fn filtering_preserves_authored_order() {
        // Every filtered list must be a subsequence of the input.
        let projects = fixture();
        for filter in ProjectFilter::ALL_OPTIONS {
            let filtered = filter_projects(filter, &projects);
            let mut cursor = projects.iter();
            for item in &filtered {
                assert!(
                    cursor.any(|p| p == item),
                    "{:?} broke input order",
                    filter
                );
            }
        }
    }

    #[test]
    fn absent_query_value_defaults_to_all() {
        assert_eq!(ProjectFilter::default(), ProjectFilter::All);
    }

    #[test]
    fn query_values_round_trip_through_serde() {
        for filter in ProjectFilter::ALL_OPTIONS {
            let json = format!("\"{}\"", filter.query_value());
            let parsed: ProjectFilter = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, filter);
        }
    }

    #[test]
    fn unknown_query_value_is_rejected() {
        let parsed: Result<ProjectFilter, _> = serde_json::from_str("\"year-4\"");
        assert!(parsed.is_err());
    }
}
