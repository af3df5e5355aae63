pub mod reqwest_oauth_token_facade_impl;
