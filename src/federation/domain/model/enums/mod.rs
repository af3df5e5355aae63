pub mod federation_domain_error;
