//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// File-system boundary (word list loading)
    Io,
    /// Score store / daily-word store boundary
    Store,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Round constructed or restored from missing/malformed state.
    /// Fatal to the construction call; never yields a partial Round.
    InvalidState(String),
    /// Word selection attempted with no candidate words
    EmptyPool,
    /// Reset attempted although today's round was already played
    DailyLimitExceeded,
    /// Input/user validation or business rule violation
    Validation(String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidState(d) => write!(f, "invalid state: {d}"),
            DomainError::EmptyPool => write!(f, "no words available to choose from"),
            DomainError::DailyLimitExceeded => {
                write!(f, "today's round has already been played")
            }
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Infra(InfraErrorKind::Store, e.to_string())
    }
}
