pub mod add_distribution;
pub mod attestation;
pub mod list;
