// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for quickprint.
//
// Every variant is fatal to the single job this process submits: there is
// no retry or local recovery anywhere. The CLI reports the error and exits
// with a non-zero status.

use thiserror::Error;

/// Top-level error type for all quickprint operations.
#[derive(Debug, Error)]
pub enum QuickprintError {
    // -- Job parameters --
    #[error("invalid job parameters: {0}")]
    Validation(String),

    #[error("an IPP attribute exceeds its 16-bit length field: {attribute} is {length} bytes")]
    FieldTooLong {
        attribute: &'static str,
        length: usize,
    },

    // -- Document I/O --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -- Network --
    #[error("invalid printer address: {0}")]
    Address(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("transport failed: {0}")]
    Transport(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, QuickprintError>;
