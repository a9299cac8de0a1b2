pub mod skill_inventory;
