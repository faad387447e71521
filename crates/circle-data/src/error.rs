use std::path::PathBuf;

/// Why a record could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("{0}")]
    Structure(String),
    #[error("unknown {field}: {code:?}")]
    UnknownCode { field: &'static str, code: String },
    #[error("unknown bit vector letter: {0:?}")]
    UnknownFlagLetter(char),
    #[error("invalid {field}: {text:?}")]
    MalformedNumber { field: &'static str, text: String },
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A parse failure tied to the file and line it happened on.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}:{line} - {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        source: ParseError,
    },
}

impl ConvertError {
    /// Line last read when the failure happened, `None` if the file never opened.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Open { .. } => None,
            Self::Parse { line, .. } => Some(*line),
        }
    }
}

pub(crate) fn structure(msg: impl Into<String>) -> ParseError {
    ParseError::Structure(msg.into())
}

pub(crate) fn parse_i32(text: &str, field: &'static str) -> Result<i32, ParseError> {
    text.parse::<i32>().map_err(|_| ParseError::MalformedNumber {
        field,
        text: text.into(),
    })
}
