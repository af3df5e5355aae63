pub mod about_resource;
