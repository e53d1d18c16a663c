use ggez::GameError;
use log::SetLoggerError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, io, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    /// Window, graphics context, font or log files could not be set up
    InitializationFailure(String),
    /// A state the engine's transitions never produce, e.g. an empty snake
    InvariantViolation(&'static str),
    Io(io::Error),
    Logger(SetLoggerError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self(ErrorType::Io(e), vec![])
    }
}

impl From<SetLoggerError> for Error {
    fn from(e: SetLoggerError) -> Self {
        Self(ErrorType::Logger(e), vec![])
    }
}

impl Error {
    pub fn initialization<S: ToString>(cause: S) -> Self {
        Self(ErrorType::InitializationFailure(cause.to_string()), vec![])
    }

    pub fn invariant(what: &'static str) -> Self {
        Self(ErrorType::InvariantViolation(what), vec![])
    }

    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    #[cfg(test)]
    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
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
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}
