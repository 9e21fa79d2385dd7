pub mod hiring;
pub mod talent;
