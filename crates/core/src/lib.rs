//! Domain types shared by the TextBee campaign crates.

pub mod error;
pub mod message_template;
pub mod types;
