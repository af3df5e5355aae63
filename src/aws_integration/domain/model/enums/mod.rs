pub mod aws_integration_error;
