pub mod colour;
pub mod flip;
pub mod layout;
pub mod primitives;
pub mod state;

pub use colour::*;
pub use flip::*;
pub use layout::*;
pub use primitives::*;
pub use state::*;
