// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the quickprint job submitter.

/// Color rendering requested for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Color,
    Monochrome,
    BlackAndWhite,
}

impl ColorMode {
    /// IPP `print-color-mode` keyword (PWG 5100.13).
    pub fn ipp_keyword(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Monochrome => "monochrome",
            Self::BlackAndWhite => "blackandwhite",
        }
    }
}

/// Duplex printing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sides {
    OneSided,
    TwoSidedLongEdge,
    TwoSidedShortEdge,
}

impl Sides {
    /// IPP `sides` keyword (RFC 8011 §5.2.8).
    pub fn ipp_keyword(&self) -> &'static str {
        match self {
            Self::OneSided => "one-sided",
            Self::TwoSidedLongEdge => "two-sided-long-edge",
            Self::TwoSidedShortEdge => "two-sided-short-edge",
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// IPP `orientation-requested` enum value (RFC 8011 §5.2.10).
    pub fn ipp_enum_value(&self) -> i32 {
        match self {
            Self::Portrait => 3,
            Self::Landscape => 4,
        }
    }
}

/// A validated print job, ready to be encoded and sent.
///
/// Built once by the CLI layer and never mutated afterwards.  A `None`
/// option means the corresponding IPP attribute is omitted from the wire
/// entirely — the encoder never substitutes a default for an absent option.
#[derive(Debug, Clone)]
pub struct PrintJobRequest {
    /// Raw document bytes, transmitted verbatim after the IPP message.
    pub document: Vec<u8>,
    /// Printer network address (IPv4 literal, e.g. "192.168.1.50").
    pub printer_host: String,
    /// Display label for the job in the printer queue.  Must fit the
    /// 16-bit IPP length field (at most 65535 bytes).
    pub job_name: String,
    pub color_mode: Option<ColorMode>,
    pub sides: Option<Sides>,
    pub orientation: Option<Orientation>,
}
