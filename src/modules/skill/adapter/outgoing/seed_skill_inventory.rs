use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::skill_inventory::SkillInventory;
use crate::modules::skill::domain::entities::{Certification, Skill};

/// The authored skill ratings and certification lines.
#[derive(Clone, Default)]
pub struct SeedSkillInventory;

impl SeedSkillInventory {
    pub fn skills() -> Vec<Skill> {
        let ratings = [
            ("Python", 90),
            ("JavaScript", 75),
            ("Artificial Intelligence", 65),
            ("HTML/CSS", 85),
            ("PHP", 70),
            ("Data Analysis", 80),
        ];

        ratings
            .into_iter()
            .map(|(name, rating)| Skill {
                name: name.to_string(),
                rating,
            })
            .collect()
    }

    pub fn certifications() -> Vec<Certification> {
        let lines = [
            "✔ Completed AI & ML in Business Certification",
            "✔ Certified in AI Research and Course Preparation for Education",
            "✔ Finalist in INES-Ruhengeri Hackathon 2023",
            "✔ Academic Excellence Award - Computer Science Department (2022)",
        ];

        lines
            .into_iter()
            .map(|description| Certification {
                description: description.to_string(),
            })
            .collect()
    }
}

#[async_trait]
impl SkillInventory for SeedSkillInventory {
    async fn skills(&self) -> Vec<Skill> {
        Self::skills()
    }

    async fn certifications(&self) -> Vec<Certification> {
        Self::certifications()
    }
}
