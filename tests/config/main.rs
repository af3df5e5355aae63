
mod resolver_tests;
