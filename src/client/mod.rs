//! Client module - handles HTTP requests for both WASM and no-WASM environments
//!
//! Both implementations expose the same `RequestApi`, using gloo_net in the
//! browser and reqwest everywhere else.

use serde_json::Value;

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::{create_client, NoWasmClient};

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(all(feature = "wasm", not(feature = "no-wasm")))]
pub use gloo::{create_client, WasmClient};

/// Body of a successful mutation. Only the status matters to callers, so an
/// empty or non-JSON body becomes `Value::Null` instead of an error.
pub(crate) fn mutation_reply(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|e| {
        log::debug!("Non-JSON success body ({e}): {text}");
        Value::Null
    })
}
