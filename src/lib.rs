//! Pointer-following cross-hair drawn straight into a locked streaming texture.
//!
//! [`frame_loop::FrameLoop`] drives any [`backend::Backend`]; [`window::MinifbBackend`]
//! is the one that puts pixels on a real screen.

pub mod backend;
pub mod churn;
pub mod config;
pub mod draw;
pub mod error;
pub mod frame_loop;
pub mod input;
pub mod surface;
pub mod types;
pub mod window;
