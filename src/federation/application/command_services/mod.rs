pub mod console_login_service_impl;
