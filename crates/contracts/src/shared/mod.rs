pub mod page;
pub mod stats;
