pub mod oauth_token_facade;
