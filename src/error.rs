use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CompilerError {
    FileNotFound(String),
    Io(std::io::Error),
    Syntax(SyntaxError),
}

impl Error for CompilerError {}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompilerError::Io(err) => writeln!(f, "IOError: {}", err),
            CompilerError::FileNotFound(err) => writeln!(f, "FileNotFoundError: {}", err),
            CompilerError::Syntax(err) => writeln!(f, "SyntaxError: {}", err),
        }
    }
}

/// Fatal syntax diagnostic. Raising one aborts the whole recognition pass;
/// nothing inside the recognizer catches it.
#[derive(Debug, PartialEq, Clone)]
pub struct SyntaxError {
    pub(crate) message: String,
    pub(crate) line: usize,
}

impl Error for SyntaxError {}

impl SyntaxError {
    pub fn new(message: String, line: usize) -> Self {
        Self { message, line }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}
