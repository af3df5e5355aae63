pub mod reqwest_http_get_facade_impl;
pub mod ssm_parameter_store_facade_impl;
pub mod sts_assume_role_facade_impl;
