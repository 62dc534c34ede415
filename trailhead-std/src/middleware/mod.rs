//! Standard middleware implementations.

pub mod conditional;
pub mod func;
pub mod logging;

pub use conditional::ConditionalMiddleware;
pub use func::{FnMiddleware, from_fn};
pub use logging::LoggingMiddleware;
