//! Request guards and cross-cutting request processing.

pub mod activity;
pub mod auth;

#[cfg(test)]
mod test;
