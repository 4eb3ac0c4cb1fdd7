pub mod context;
pub mod integration;
pub mod state;
pub mod tx;
