use async_trait::async_trait;

use crate::modules::timeline::application::ports::outgoing::timeline_source::TimelineSource;
use crate::modules::timeline::domain::entities::TimelineEvent;

/// The authored milestones, oldest first.
#[derive(Clone, Default)]
pub struct SeedTimeline;

impl SeedTimeline {
    pub fn events() -> Vec<TimelineEvent> {
        let entries = [
            (
                "September 2021",
                "Started Computer Science at INES-Ruhengeri",
                "Began my journey in Computer Science with a focus on software engineering",
            ),
            (
                "February 2022",
                "First Programming Project",
                "Completed my first major programming assignment using Python",
            ),
            (
                "July 2022",
                "Academic Excellence Award",
                "Received recognition for outstanding performance in Year 1",
            ),
            (
                "January 2023",
                "Web Development Project",
                "Built my first full-stack web application using PHP and MySQL",
            ),
            (
                "June 2023",
                "Internship at Caritas CDJP Gikongoro",
                "Developed and deployed the organization's website",
            ),
            (
                "November 2023",
                "INES-Ruhengeri Hackathon",
                "Reached the finals with an innovative solution for local agricultural challenges",
            ),
            (
                "January 2024",
                "AI Certification",
                "Completed AI & ML in Business certification program",
            ),
            (
                "February 2024",
                "Dissertation Project Started",
                "Began work on Smart Agriculture Monitoring System",
            ),
            (
                "January 2025",
                "AI Chatbot Group Project",
                "Led a team to develop an NLP-based chatbot for student services",
            ),
        ];

        entries
            .into_iter()
            .map(|(date, title, description)| TimelineEvent {
                date: date.to_string(),
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect()
    }
}

#[async_trait]
impl TimelineSource for SeedTimeline {
    async fn events(&self) -> Vec<TimelineEvent> {
        Self::events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_lists_nine_milestones_oldest_first() {
        let events = SeedTimeline::events();

        assert_eq!(events.len(), 9);
        assert_eq!(events[0].date, "September 2021");
        assert_eq!(
            events[0].title,
            "Started Computer Science at INES-Ruhengeri"
        );
        assert_eq!(events[8].date, "January 2025");
        assert_eq!(events[8].title, "AI Chatbot Group Project");
    }

    #[test]
    fn seed_milestones_all_carry_a_description() {
        let events = SeedTimeline::events();
        assert!(events.iter().all(|e| !e.description.is_empty()));
    }
}
