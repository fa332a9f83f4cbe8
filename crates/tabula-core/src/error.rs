use std::sync::Arc;

/// Creates an [`Error`] from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// Returns early with an [`Error`] built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// An error that can occur in Tabula.
///
/// Errors only arise on the ingestion boundary (parsing schema, record, or
/// app-listing payloads). The transformation core degrades instead of
/// failing and never produces one of these.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    /// Formatted message errors, usually created via `err!` / `bail!`.
    Adhoc(String),

    /// A payload failed to deserialize.
    Json(serde_json::Error),

    Anyhow(anyhow::Error),
}

impl Error {
    #[doc(hidden)]
    pub fn from_args(args: std::fmt::Arguments<'_>) -> Self {
        Self::from(ErrorKind::Adhoc(std::fmt::format(args)))
    }

    /// Adds context to this error.
    ///
    /// Context is displayed first, followed by the root cause.
    pub fn context(self, message: impl Into<String>) -> Self {
        Error {
            inner: Arc::new(ErrorInner {
                kind: ErrorKind::Adhoc(message.into()),
                cause: Some(self),
            }),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner.kind {
            ErrorKind::Json(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::Adhoc(_) => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            match &err.inner.kind {
                ErrorKind::Adhoc(msg) => f.write_str(msg)?,
                ErrorKind::Json(err) => core::fmt::Display::fmt(err, f)?,
                ErrorKind::Anyhow(err) => core::fmt::Display::fmt(err, f)?,
            }
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::from(ErrorKind::Json(err))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::from(ErrorKind::Anyhow(err))
    }
}
