
pub mod interface;
pub mod config;
pub mod context;
pub mod state;
pub mod operate;
pub mod action;
pub mod transaction;


#[cfg(test)]
mod tests;
