use crate::core::error::NetworkError;

/// Outcome of every data-source operation.
pub type NetResult<T> = Result<T, NetworkError>;

/// Side-effecting hooks for chaining on a [`Result`].
///
/// Each hook runs only on its matching variant and hands the original value back, so a
/// caller can write `source.get_coins().await.on_success(..).on_error(..)`.
pub trait ResultExt<T, E>: Sized {
    /// Runs `f` on the success value, if any.
    #[must_use]
    fn on_success<F: FnOnce(&T)>(self, f: F) -> Self;

    /// Runs `f` on the error, if any.
    #[must_use]
    fn on_error<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn on_success<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(value) = &self {
            f(value);
        }
        self
    }

    fn on_error<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(error) = &self {
            f(error);
        }
        self
    }
}
