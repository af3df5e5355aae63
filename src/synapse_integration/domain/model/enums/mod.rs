pub mod synapse_integration_error;
