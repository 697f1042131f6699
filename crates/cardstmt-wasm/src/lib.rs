//! WASM bindings for credit-card statement extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Errors are returned as `{"error": "<message>"}` objects.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use cardstmt_core::api::{self, ApiError, UploadRequest};
use cardstmt_core::StatementConfig;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn error_to_js(err: ApiError) -> JsValue {
    to_js(&err).unwrap_or_else(|e| e)
}

/// Extract statement data from already-extracted text.
#[wasm_bindgen]
pub fn parse_statement_text(text: &str) -> Result<JsValue, JsValue> {
    let statement = api::parse_text(text, &StatementConfig::default()).map_err(error_to_js)?;
    to_js(&statement)
}

/// Names of the supported card issuers, in detection order.
#[wasm_bindgen]
pub fn supported_issuers() -> js_sys::Array {
    cardstmt_core::supported_issuers()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Statement extractor class for browser use.
#[wasm_bindgen]
pub struct StatementExtractor {
    config: StatementConfig,
}

#[wasm_bindgen]
impl StatementExtractor {
    /// Create a new statement extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: StatementConfig::default(),
        }
    }

    /// Limit the number of transactions returned.
    #[wasm_bindgen]
    pub fn set_max_transactions(&mut self, max: usize) {
        self.config.extraction.max_transactions = max;
    }

    /// Extract a statement from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let statement = api::parse_text(text, &self.config).map_err(error_to_js)?;
        to_js(&statement)
    }

    /// Extract a statement from an uploaded PDF file.
    #[wasm_bindgen]
    pub fn extract_pdf(&self, filename: &str, data: &[u8]) -> Result<JsValue, JsValue> {
        let request = UploadRequest::new(filename, data.to_vec());
        let statement = api::handle_upload(&request, &self.config).map_err(error_to_js)?;
        to_js(&statement)
    }

    /// Fields of a statement that degraded to "Not found".
    #[wasm_bindgen]
    pub fn missing_fields(&self, text: &str) -> Result<js_sys::Array, JsValue> {
        let statement = api::parse_text(text, &self.config).map_err(error_to_js)?;
        Ok(statement
            .missing_fields()
            .into_iter()
            .map(JsValue::from_str)
            .collect())
    }

    /// Service health and capability listing.
    #[wasm_bindgen]
    pub fn health(&self) -> Result<JsValue, JsValue> {
        to_js(&api::health())
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::new()
    }
}
