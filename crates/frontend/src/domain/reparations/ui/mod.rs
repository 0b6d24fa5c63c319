pub mod add_reparation;
pub mod item_actions;
pub mod list;
