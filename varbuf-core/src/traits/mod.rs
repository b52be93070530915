//! Trait abstractions for types that have a wire encoding

pub mod wire;

pub use wire::{Decode, Encode};
