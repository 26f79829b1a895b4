use thiserror::Error;

pub type Result<T> = std::result::Result<T, LessonError>;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Could not parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Channel '{0}' closed unexpectedly")]
    ChannelClosed(&'static str),

    #[error("Worker thread '{0}' panicked")]
    WorkerPanicked(String),
}

impl LessonError {
    pub fn parse(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = LessonError::parse("abc", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "Could not parse 'abc': invalid digit found in string"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn open_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }
        assert!(matches!(open_missing(), Err(LessonError::Io(_))));
    }
}
