/// Log target used for lines that report a completed, successful step.
pub const SUCCESS_TARGET: &str = "hacknet::success";

/// Logs a success line. Rendered with its own glyph by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::SUCCESS_TARGET, $($arg)*)
    };
}
