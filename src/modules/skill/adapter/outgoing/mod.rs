mod seed_skill_inventory;

pub use seed_skill_inventory::SeedSkillInventory;
