pub mod articles;
pub mod items;
pub mod operations;
pub mod persons;
pub mod structures;
