//! This is the library of the ackbot reaction notifier.
pub mod github;
pub mod notifier;
pub mod utils;

#[cfg(test)]
mod tests;
