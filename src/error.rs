use std::fmt::{self, Debug, Display, Formatter};
use std::result;

use ggez::GameError;

use crate::program::ParamError;

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    Param(ParamError),
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::GameError(e) => write!(f, "ggez: {}", e),
            ErrorType::Param(e) => write!(f, "parameter: {}", e),
        }
    }
}

/// The trace is stored innermost step first
#[must_use]
pub struct Error {
    kind: ErrorType,
    trace: Vec<String>,
}

impl Error {
    pub fn kind(&self) -> &ErrorType {
        &self.kind
    }

    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.trace.push(s.to_string());
        self
    }
}

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self { kind: ErrorType::GameError(e), trace: vec![] }
    }
}

impl From<ParamError> for Error {
    fn from(e: ParamError) -> Self {
        Self { kind: ErrorType::Param(e), trace: vec![] }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.kind)?;
        if !self.trace.is_empty() {
            writeln!(f, "Trace:")?;
        }
        for step in self.trace.iter().rev() {
            writeln!(f, " in {}", step)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s))
    }
}
