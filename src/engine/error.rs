//! Engine error types

use std::fmt;
use crate::assembler::AssembleError;
use crate::registry::RegistryError;
use crate::validator::ValidateError;

/// Errors from the resolution stages
///
/// All variants are non-retryable input or configuration errors carrying the
/// offending identifier.
#[derive(Debug)]
pub enum EngineError {
    Template(RegistryError),
    Filter(ValidateError),
    Assemble(AssembleError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(e) => e.fmt(f),
            Self::Filter(e) => e.fmt(f),
            Self::Assemble(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Template(e) => Some(e),
            Self::Filter(e) => Some(e),
            Self::Assemble(e) => Some(e),
        }
    }
}

impl From<RegistryError> for EngineError {
    fn from(err: RegistryError) -> Self {
        Self::Template(err)
    }
}

impl From<ValidateError> for EngineError {
    fn from(err: ValidateError) -> Self {
        Self::Filter(err)
    }
}

impl From<AssembleError> for EngineError {
    fn from(err: AssembleError) -> Self {
        Self::Assemble(err)
    }
}

/// Errors from a full resolve-execute-postprocess run
///
/// Execution failures keep the executor's own error type; this layer does
/// not reinterpret them.
#[derive(Debug)]
pub enum RunError<E> {
    Resolve(EngineError),
    Execute(E),
}

impl<E: fmt::Display> fmt::Display for RunError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve(e) => e.fmt(f),
            Self::Execute(e) => write!(f, "Query execution failed: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RunError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolve(e) => Some(e),
            Self::Execute(e) => Some(e),
        }
    }
}
