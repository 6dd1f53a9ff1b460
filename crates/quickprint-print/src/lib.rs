// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Quickprint Print — IPP Print-Job encoding and the HTTP/TCP transport that
// delivers it.  This crate bridges between the core domain types defined in
// `quickprint-core` and the printer on the wire.

pub mod encoder;
pub mod transport;

pub use encoder::encode_print_job;
pub use transport::{IPP_PORT, send};

use quickprint_core::error::Result;
use quickprint_core::types::PrintJobRequest;

/// Encode and deliver one print job, returning the printer's raw response.
///
/// The response is the unparsed HTTP reply (headers and body); an empty
/// vec means the printer accepted the bytes but closed the connection
/// without replying.
pub async fn submit_print_job(request: &PrintJobRequest) -> Result<Vec<u8>> {
    let encoded = encoder::encode_print_job(request)?;
    transport::send(&encoded, &request.document, &request.printer_host, IPP_PORT).await
}
