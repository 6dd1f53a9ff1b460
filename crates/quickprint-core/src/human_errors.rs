// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command line.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The CLI prints the pair on stderr alongside the structured log line.

use crate::error::QuickprintError;

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (first line of the failure output).
    pub message: String,
    /// What the user should try (second line).
    pub suggestion: String,
}

/// Convert a `QuickprintError` into a `HumanError` anyone can act on.
pub fn humanize_error(err: &QuickprintError) -> HumanError {
    match err {
        QuickprintError::Validation(detail) => HumanError {
            message: "Those print settings don't look right.".into(),
            suggestion: format!("Check the command line and try again. ({detail})"),
        },

        QuickprintError::FieldTooLong { attribute, .. } => HumanError {
            message: format!("The job's {attribute} is too long to send to the printer."),
            suggestion: "Use --job-name to give the job a shorter label, then try again.".into(),
        },

        QuickprintError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Check the path and try again.".into(),
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "quickprint doesn't have permission to read that file.".into(),
                    suggestion: "Check the file permissions, or copy the file somewhere readable first.".into(),
                }
            } else {
                HumanError {
                    message: "There was a problem reading the file.".into(),
                    suggestion: format!("Try again with a different copy of the file. ({io_err})"),
                }
            }
        }

        QuickprintError::Address(detail) => HumanError {
            message: "The printer address doesn't look right.".into(),
            suggestion: format!(
                "Check the address and try again. It should look like 192.168.1.100. ({detail})"
            ),
        },

        QuickprintError::Connection(detail) => {
            let lower = detail.to_ascii_lowercase();
            if lower.contains("refused") {
                HumanError {
                    message: "The printer refused our connection.".into(),
                    suggestion: "The printer may be turned off, busy, or not accepting network connections. Try turning it off and on again.".into(),
                }
            } else {
                HumanError {
                    message: "We couldn't reach the printer.".into(),
                    suggestion: "Make sure the printer is turned on and connected to the same network as this machine.".into(),
                }
            }
        }

        QuickprintError::Transport(detail) => {
            let lower = detail.to_ascii_lowercase();
            if lower.contains("connection reset") || lower.contains("broken pipe") {
                HumanError {
                    message: "The connection to the printer was interrupted.".into(),
                    suggestion: "This sometimes happens with Wi-Fi. Try sending the job again.".into(),
                }
            } else {
                HumanError {
                    message: "The printer had a problem mid-transfer.".into(),
                    suggestion: format!(
                        "Try again. If this keeps happening, try turning the printer off and on again. (Detail: {detail})"
                    ),
                }
            }
        }
    }
}
