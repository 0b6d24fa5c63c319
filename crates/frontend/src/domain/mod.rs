pub mod arrivals;
pub mod articles;
pub mod distributions;
pub mod items;
pub mod operations;
pub mod persons;
pub mod reparations;
pub mod structures;
