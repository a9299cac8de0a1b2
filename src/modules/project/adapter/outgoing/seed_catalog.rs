use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_catalog::ProjectCatalog;
use crate::modules::project::domain::entities::{Project, ProjectKind};

/// The fixed project list, authored in code. Order here is the order
/// every view and filter result preserves.
#[derive(Clone, Default)]
pub struct SeedProjectCatalog;

impl SeedProjectCatalog {
    pub fn projects() -> Vec<Project> {
        vec![
            Project {
                title: "Data Analysis Project".to_string(),
                year: 2,
                kind: ProjectKind::Individual,
                is_group: false,
                description: "A project analyzing trends of Rwanda GDP accounts using Pandas \
                              and Matplotlib. Implemented data cleaning, visualization, and \
                              trend analysis techniques to draw meaningful insights from \
                              economic data."
                    .to_string(),
                link: Some(
                    "https://github.com/cyuzuzocyisezerano/data-analysis-project".to_string(),
                ),
            },
            Project {
                title: "AI Chatbot".to_string(),
                year: 3,
                kind: ProjectKind::Group,
                is_group: true,
                description: "Developed an AI-Powered chatbot using Python and NLP Techniques. \
                              Our team created a conversational agent capable of answering \
                              student queries about university resources and courses."
                    .to_string(),
                link: Some("https://github.com/cyuzuzocyisezerano/ai-chatbot".to_string()),
            },
            Project {
                title: "Caritas CDJP Gikongoro Website".to_string(),
                year: 2,
                kind: ProjectKind::Internship,
                is_group: false,
                description: "Designed and developed a website for Caritas Gikongoro using \
                              WordPress CMS. Implemented custom themes, content management \
                              system, and donation tracking functionality."
                    .to_string(),
                link: Some("https://github.com/cyuzuzocyisezerano/caritas-website".to_string()),
            },
            Project {
                title: "Smart Agriculture Monitoring System".to_string(),
                year: 3,
                kind: ProjectKind::Dissertation,
                is_group: false,
                description: "Developing an IoT-based system to monitor soil conditions, \
                              weather patterns, and crop health for small-scale farmers in \
                              Rwanda. The system uses sensors to collect data and provides \
                              recommendations for optimal farming practices."
                    .to_string(),
                link: Some("https://github.com/cyuzuzocyisezerano/smart-agriculture".to_string()),
            },
        ]
    }
}

#[async_trait]
impl ProjectCatalog for SeedProjectCatalog {
    async fn all(&self) -> Vec<Project> {
        Self::projects()
    }
}
