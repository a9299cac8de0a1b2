use async_trait::async_trait;

use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsUseCase, SkillsOverview,
};
use crate::modules::skill::application::ports::outgoing::skill_inventory::SkillInventory;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetSkillsService<I>
where
    I: SkillInventory,
{
    inventory: I,
}

impl<I> GetSkillsService<I>
where
    I: SkillInventory,
{
    pub fn new(inventory: I) -> Self {
        Self { inventory }
    }
}

#[async_trait]
impl<I> GetSkillsUseCase for GetSkillsService<I>
where
    I: SkillInventory + Send + Sync,
{
    async fn execute(&self) -> SkillsOverview {
        SkillsOverview {
            skills: self.inventory.skills().await,
            certifications: self.inventory.certifications().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::modules::skill::domain::entities::{Certification, Skill};

    /* --------------------------------------------------
     * Mock SkillInventory
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockSkillInventory {
        skills: Vec<Skill>,
        certifications: Vec<Certification>,
    }

    #[async_trait]
    impl SkillInventory for MockSkillInventory {
        async fn skills(&self) -> Vec<Skill> {
            self.skills.clone()
        }

        async fn certifications(&self) -> Vec<Certification> {
            self.certifications.clone()
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn execute_gathers_skills_and_certifications() {
        let inventory = MockSkillInventory {
            skills: vec![Skill {
                name: "Python".to_string(),
                rating: 90,
            }],
            certifications: vec![Certification {
                description: "✔ Something earned".to_string(),
            }],
        };
        let service = GetSkillsService::new(inventory);

        let overview = service.execute().await;

        assert_eq!(overview.skills.len(), 1);
        assert_eq!(overview.skills[0].name, "Python");
        assert_eq!(overview.certifications.len(), 1);
    }

    #[tokio::test]
    async fn execute_preserves_inventory_order() {
        let inventory = MockSkillInventory {
            skills: vec![
                Skill {
                    name: "B".to_string(),
                    rating: 10,
                },
                Skill {
                    name: "A".to_string(),
                    rating: 20,
                },
            ],
            certifications: vec![],
        };
        let service = GetSkillsService::new(inventory);

        let overview = service.execute().await;

        assert_eq!(overview.skills[0].name, "B");
        assert_eq!(overview.skills[1].name, "A");
    }
}
