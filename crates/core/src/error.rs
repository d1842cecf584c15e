#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_validation() {
        let err = CoreError::Validation("page must be >= 1".to_string());
        assert_eq!(err.to_string(), "Validation failed: page must be >= 1");
    }
}
