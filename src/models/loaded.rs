use crate::errors::AppError;

/// Outcome of a page's data fetch, carried into the template so a failed
/// query is always rendered rather than shown as an empty page.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Ready(T),
    Failed(String),
}

impl<T> Loaded<T> {
    /// Keep the data, or log the error and keep only `message` for the page.
    pub fn from_result(result: Result<T, AppError>, message: &str) -> Self {
        match result {
            Ok(data) => Loaded::Ready(data),
            Err(e) => {
                log::error!("{message}: {e}");
                Loaded::Failed(message.to_string())
            }
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Loaded<U> {
        match self {
            Loaded::Ready(data) => Loaded::Ready(f(data)),
            Loaded::Failed(reason) => Loaded::Failed(reason),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loaded::Ready(data) => Some(data),
            Loaded::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Loaded::Ready(_) => None,
            Loaded::Failed(reason) => Some(reason),
        }
    }

    /// Template guard for values that only mean something once loaded.
    pub fn is_ready(&self) -> bool {
        matches!(self, Loaded::Ready(_))
    }
}
