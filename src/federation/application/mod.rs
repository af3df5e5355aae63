pub mod authorization_request_builder;
pub mod claims_decoder;
pub mod command_services;
pub mod console_url_builder;
pub mod session_request_builder;
