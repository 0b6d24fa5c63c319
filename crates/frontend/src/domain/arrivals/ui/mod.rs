pub mod add_arrival;
pub mod list;
