// Errors raised while talking to the browser. The simulations themselves
// never fail; only host calls (window lookup, context creation, listener
// registration) can. These never reach the page: the entry points log them
// and leave the effect inert.

use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("no global window available")]
    NoWindow,

    #[error("canvas has no {0:?} context")]
    NoContext(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        let msg = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        FxError::Js(msg)
    }
}
