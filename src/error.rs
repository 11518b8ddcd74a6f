use std::{error::Error, fmt, io};

// Writing a line is the only thing that can fail. Callers of the plain `msg`/`write`
// paths never see this; the `try_` variants hand it back.
#[derive(Debug)]
pub enum LogError {
    WriteFailed(io::Error),
}

impl Error for LogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LogError::WriteFailed(err) => Some(err),
        }
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LogError::WriteFailed(err) => write!(f, "can't write log line: {}", err),
        }
    }
}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> LogError {
        LogError::WriteFailed(err)
    }
}

#[derive(Debug, Clone)]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub fn new(input: &str) -> ParseLevelError {
        ParseLevelError {
            input: input.to_string(),
        }
    }
}

impl Error for ParseLevelError {}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown level: {:?}", self.input)
    }
}
