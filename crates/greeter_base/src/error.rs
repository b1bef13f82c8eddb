use std::error::Error as StdError;
use std::fmt;
use std::io;
use tracing_error::{SpanTrace, SpanTraceStatus};

/// Error variants that can occur while producing a greeting.
#[derive(Debug)]
pub enum ErrorKind {
    /// Writing the greeting to the output stream failed
    Output { source: io::Error },

    /// Catch-all for other errors with a message
    Message { message: String },
}

/* 📖 # Why separate ErrorKind and GreeterError?
ErrorKind holds the structural variants and their data, so callers can pattern match on it.
GreeterError wraps the kind together with the context strings attached during propagation
and the span trace captured when the error was created.
*/

/// Error type wrapping an [`ErrorKind`] with context and a captured span trace.
pub struct GreeterError {
    kind: ErrorKind,
    context: Vec<String>,
    span_trace: SpanTrace,
}

impl GreeterError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            span_trace: SpanTrace::capture(),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    pub fn output(source: io::Error) -> Self {
        Self::new(ErrorKind::Output { source })
    }

    /// Attaches context to an error.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    fn fmt_kind(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Output { source } => write!(f, "Output error: {}", source),
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

impl From<ErrorKind> for GreeterError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for GreeterError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::Output { source } => Some(source),
            ErrorKind::Message { .. } => None,
        }
    }
}

/// Context entries print in the order they were attached, before the kind.
impl fmt::Display for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        self.fmt_kind(f)
    }
}

impl fmt::Debug for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_kind(f)?;
        let last = self.context.len().saturating_sub(1);
        for (i, ctx) in self.context.iter().enumerate() {
            let branch = if i == last { "└─" } else { "├─" };
            write!(f, "\n{} {}", branch, ctx)?;
        }
        // Only print the trace when spans were actually recorded
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            write!(f, "\nTrace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/* 📖 # Why use Box<GreeterError> in the result type?

Boxing the error reduces the size of the result type, making it more efficient to return in the common case.
*/

/// Standard result type used across the greeter crates.
pub type GreeterResult<T> = std::result::Result<T, Box<GreeterError>>;

/// Extension trait for attaching context to Results during error propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error, evaluated eagerly.
    fn context(self, context: impl Into<String>) -> GreeterResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for GreeterResult<T> {
    fn context(self, context: impl Into<String>) -> GreeterResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}
