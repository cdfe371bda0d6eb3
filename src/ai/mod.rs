//! Model client boundary.

pub mod client;

pub use client::{GroqClient, ModelClient};
