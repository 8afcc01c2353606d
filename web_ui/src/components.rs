pub mod button;
pub mod card;
pub mod glyphs;
pub mod utils;

pub use button::*;
pub use card::*;
pub use glyphs::*;
pub use utils::*;
