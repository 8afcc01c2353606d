pub mod board;
pub mod class_helpers;
pub mod components;
pub mod contexts;
pub mod types;
