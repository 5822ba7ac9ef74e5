//! Shared типы между подсистемами

pub mod input;

pub use input::*;
