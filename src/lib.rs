#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Scroll-driven 3D portfolio page.
//!
//! The modules at the crate root are plain Rust and run anywhere; everything
//! that touches the browser lives in the wasm-only `wasm` module.

pub mod camera;
pub mod config;
pub mod contact;
pub mod easing;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod presenter;
pub mod scene;
pub mod screen;
pub mod scroll;
pub mod stats;
pub mod theme;

pub use error::{PortfolioError, Result};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
pub use wasm::{LocalStore, ScreenCanvas};

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
