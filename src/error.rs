//! Crate-level error type.

use thiserror::Error;

/// Errors surfaced while bringing the page up.
///
/// Per-frame work never returns these; only initialization paths do.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// The browser could not hand out a WebGL2 context.
    #[error("WebGL2 is not available in this browser")]
    NoWebGl,
    /// Every configured model source failed to load.
    #[error("all {attempts} model sources failed to load")]
    ModelLoadExhausted { attempts: usize },
    /// The model bytes were fetched but are not a usable binary glTF.
    #[error("model parse error: {0}")]
    ModelParse(#[from] gltf::Error),
    /// The model parsed but contained no triangle geometry.
    #[error("model contains no drawable meshes")]
    EmptyModel,
    /// The page configuration block is malformed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    /// The configuration parsed but holds a value the page cannot run with.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A DOM element or browser API the page depends on is missing.
    #[error("DOM error: {0}")]
    Dom(String),
    /// Persistent storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(target_arch = "wasm32")]
impl From<PortfolioError> for wasm_bindgen::JsValue {
    fn from(e: PortfolioError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
