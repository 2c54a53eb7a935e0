use std::path::PathBuf;

pub type TallyResult<T> = Result<T, TallyError>;

#[derive(thiserror::Error, Debug)]
pub enum TallyError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("missing digit asset {digit:04}: no file at '{}'", .path.display())]
    MissingAsset { digit: u16, path: PathBuf },

    #[error("assembler error: {0}")]
    Assembler(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TallyError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn assembler(msg: impl Into<String>) -> Self {
        Self::Assembler(msg.into())
    }

    pub fn missing_asset(digit: u16, path: impl Into<PathBuf>) -> Self {
        Self::MissingAsset {
            digit,
            path: path.into(),
        }
    }
}
