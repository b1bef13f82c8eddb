/* 📖 # Why have greeter_base as a separate library?
greeter_base holds the error type and the tracing setup.
The greeter crate stays focused on producing the greeting, and the ambient pieces can be tested on their own.
*/

pub mod error;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, GreeterError, GreeterResult, ResultExt};
