pub mod sim;

pub use sim::context::*;
pub use sim::integration::*;
pub use sim::state::*;
pub use sim::tx::*;
