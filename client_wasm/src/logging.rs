//! Console logging for the browser client

/// `console.log` with `format!` arguments
macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!($($t)*)))
    };
}

/// `console.error` with `format!` arguments
macro_rules! console_error {
    ($($t:tt)*) => {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!($($t)*)))
    };
}

pub(crate) use console_error;
pub(crate) use console_log;
