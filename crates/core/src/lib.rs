//! Core library for the VR to-do widget
//!
//! This crate contains the widget's state management, including:
//! - The task store and its capacity policy
//! - Pluggable key-value storage for the persisted slot
//! - The grouped view rendered by the widget

pub mod error;
pub mod task;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
