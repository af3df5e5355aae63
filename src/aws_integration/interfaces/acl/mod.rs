pub mod http_get_facade;
pub mod parameter_store_facade;
pub mod sts_facade;
