pub mod bootstrap;
pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod registration;
pub mod submission;
