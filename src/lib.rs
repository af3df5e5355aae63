pub mod aws_integration;
pub mod config;
pub mod federation;
pub mod synapse_integration;
