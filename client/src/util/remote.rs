//! Load state for data fetched after hydration.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::fmt::Display;

/// A value that is loading, loaded, or failed with a message.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply `f` to a loaded value in place; other states are untouched.
    pub fn update_ready(&mut self, f: impl FnOnce(&mut T)) {
        if let Self::Ready(value) = self {
            f(value);
        }
    }
}

impl<T: Clone> Remote<Vec<T>> {
    /// Loaded items, or an empty list while loading or failed.
    pub fn items(&self) -> Vec<T> {
        self.ready().cloned().unwrap_or_default()
    }
}
