pub use crate::types::RustPermuteError;

pub type Result<T> = std::result::Result<T, RustPermuteError>;

pub trait ErrorContext<T> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RustPermuteError::ConfigError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_prefixes_message() {
        let parsed: std::result::Result<u8, _> = "300".parse::<u8>();
        let err = parsed.with_context(|| "reading port".to_string()).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: reading port: "));
    }
}
