pub mod federation_rest_controller;
