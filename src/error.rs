use wasm_bindgen::JsValue;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BackdropError>;

/// Everything that can stop the backdrop from starting or running.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    /// A browser global (`window`, `document`) is not reachable.
    #[error("browser global `{0}` is unavailable")]
    MissingGlobal(&'static str),

    /// No element carries the canvas id.
    #[error("canvas element #{0} not found")]
    CanvasNotFound(String),

    /// The element exists but is not a `<canvas>`.
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    /// `getContext("2d")` returned nothing.
    #[error("2d drawing context unavailable")]
    ContextUnavailable,

    /// Configuration parsed but failed validation.
    #[error("invalid config: {0}")]
    Config(String),

    /// Configuration text is not valid JSON for [`crate::SceneConfig`].
    #[error("malformed config json: {0}")]
    Json(#[from] serde_json::Error),

    /// An exception thrown by a browser API.
    #[error("javascript error: {0}")]
    Js(String),
}

impl BackdropError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap a thrown JS value.
    #[cfg(target_arch = "wasm32")]
    pub fn js(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

impl From<BackdropError> for JsValue {
    fn from(err: BackdropError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
