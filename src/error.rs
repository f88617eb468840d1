// Copyright 2021 Vladislav Melnik
// SPDX-License-Identifier: MIT

use std::panic::Location;
use thiserror::Error;

/// A broken invariant reported by [`assert`](crate::assert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("assertion failed at {file}:{line}:{column}")]
pub struct Violation {
    file: &'static str,
    line: u32,
    column: u32,
}

impl Violation {
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Violation {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

/// Why a computation produced no value.
///
/// Computation types with an error channel use this as their failure
/// payload. `Alternative::or_else` may only recover `ExpectedEmpty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShortCircuit {
    #[error("no result")]
    ExpectedEmpty,
    #[error(transparent)]
    InvariantViolation(#[from] Violation),
}

impl ShortCircuit {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ShortCircuit::ExpectedEmpty)
    }
}
