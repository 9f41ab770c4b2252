pub mod gateway;
pub mod identity;
pub mod resolver;
#[cfg(test)]
mod resolver_test;
pub mod session;
