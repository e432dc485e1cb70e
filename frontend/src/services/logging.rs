use gloo::console;

/// Console-backed diagnostic logger, tagged with the reporting component.
///
/// Failures never reach the page UI; the browser console is the only
/// diagnostic channel.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::tag(component), message.to_string());
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::tag(component), message.to_string());
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::tag(component), message.to_string());
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::tag(component), message.to_string());
    }

    fn tag(component: &str) -> String {
        format!("[{}]", component)
    }
}
