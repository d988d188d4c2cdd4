#![allow(dead_code)]

pub mod fixtures;
pub mod source;

pub use fixtures::{CNI_FILE, config_for, generate_example};
pub use source::InMemorySource;
