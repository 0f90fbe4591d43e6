//! Variadic print sugar.

/// Route a print call through a router, converting each argument via
/// `PrintValue::from`.
///
/// ```rust,ignore
/// use printsink::{printv, SinkRouter};
///
/// let router = SinkRouter::new();
/// printv!(router, "total:", 42)?;
/// ```
#[macro_export]
macro_rules! printv {
    ($router:expr $(,)?) => {
        $router.print(Vec::new())
    };
    ($router:expr, $($value:expr),+ $(,)?) => {
        $router.print(vec![$($crate::PrintValue::from($value)),+])
    };
}
