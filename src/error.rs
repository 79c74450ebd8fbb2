pub type SortreelResult<T> = Result<T, SortreelError>;

#[derive(thiserror::Error, Debug)]
pub enum SortreelError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SortreelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            SortreelError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            SortreelError::encode("x")
                .to_string()
                .contains("encode error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = SortreelError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
