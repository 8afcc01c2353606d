pub mod flip_log;
pub mod placer;

pub use flip_log::*;
pub use placer::*;
