/// MACROS
/// Cross-platform logging for user-facing messages.
/// Writes to the browser console on the web and to a styled stdout line natively.
#[macro_export]
macro_rules! log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!($($t)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        println!("{}", ::console::style(format!($($t)*)).cyan());
    }};
}
