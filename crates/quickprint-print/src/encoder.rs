// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// IPP Print-Job request encoder (RFC 8010 binary encoding).
//
// Produces the exact byte sequence a Print-Job submission carries: a fixed
// header, an operation-attributes group, a job-attributes group, and the
// end-of-attributes tag.  Printers validate this encoding strictly, so every
// constant below is part of the wire contract.
//
// ```text
// version-number:  2 bytes (major, minor)
// operation-id:    2 bytes (big-endian u16)
// request-id:      4 bytes (big-endian u32)
// attribute-groups: variable
//   delimiter-tag: 1 byte
//   attributes:    variable
//     value-tag:    1 byte
//     name-length:  2 bytes (big-endian u16)
//     name:         name-length bytes
//     value-length: 2 bytes (big-endian u16)
//     value:        value-length bytes
// end-of-attributes-tag: 1 byte (0x03)
// ```
//
// The document bytes are not part of the encoded message; the transport
// appends them after it on the wire.

use tracing::debug;

use quickprint_core::error::{QuickprintError, Result};
use quickprint_core::types::PrintJobRequest;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// IPP version 1.1 major byte.
pub const IPP_VERSION_MAJOR: u8 = 0x01;

/// IPP version 1.1 minor byte.
pub const IPP_VERSION_MINOR: u8 = 0x01;

/// Print-Job operation identifier (RFC 8011 §4.2.1).
pub const OP_PRINT_JOB: u16 = 0x0002;

/// Request-id carried by every message.  One job per process invocation,
/// so the counter never advances past its first value.
pub const PRINT_JOB_REQUEST_ID: u32 = 1;

// ---------------------------------------------------------------------------
// IPP delimiter tags (RFC 8010 §3.5.1)
// ---------------------------------------------------------------------------

/// Operation attributes group delimiter.
pub const TAG_OPERATION_ATTRIBUTES: u8 = 0x01;

/// Job attributes group delimiter.
pub const TAG_JOB_ATTRIBUTES: u8 = 0x02;

/// End-of-attributes-tag — terminates the attribute section.
pub const TAG_END_OF_ATTRIBUTES: u8 = 0x03;

// ---------------------------------------------------------------------------
// IPP value tags (RFC 8010 §3.5.2)
// ---------------------------------------------------------------------------

/// Enum value (4 bytes, signed big-endian).  The conformant type for
/// `orientation-requested`.
pub const VALUE_TAG_ENUM: u8 = 0x23;

/// nameWithoutLanguage (UTF-8 string).
pub const VALUE_TAG_NAME: u8 = 0x42;

/// keyword (US-ASCII string, used for print-color-mode and sides).
pub const VALUE_TAG_KEYWORD: u8 = 0x44;

/// uri (US-ASCII string).
pub const VALUE_TAG_URI: u8 = 0x45;

/// charset (US-ASCII string, e.g. "utf-8").
pub const VALUE_TAG_CHARSET: u8 = 0x47;

/// naturalLanguage (US-ASCII string, e.g. "en-us").
pub const VALUE_TAG_NATURAL_LANGUAGE: u8 = 0x48;

// ---------------------------------------------------------------------------
// Fixed attribute values
// ---------------------------------------------------------------------------

/// Charset announced in every request.
pub const ATTRIBUTES_CHARSET: &str = "utf-8";

/// Natural language announced in every request.
pub const ATTRIBUTES_NATURAL_LANGUAGE: &str = "en-us";

/// `requesting-user-name` value identifying the submitting tool.
pub const REQUESTING_USER_NAME: &str = "quickprint";

/// Resource path under which IPP printers expose the print service.
pub const PRINTER_URI_PATH: &str = "/ipp/print";

/// Largest byte length an IPP name- or value-length field can carry.
const MAX_FIELD_LEN: usize = u16::MAX as usize;

// ---------------------------------------------------------------------------
// IPP binary request builder
// ---------------------------------------------------------------------------

/// Builder for constructing IPP request messages.
///
/// Appends length-prefixed fields to a growable byte buffer.  Callers
/// validate variable-length fields against [`MAX_FIELD_LEN`] before
/// appending (see [`encode_print_job`]), so no 16-bit length field can
/// ever wrap.
struct IppRequestBuilder {
    /// Accumulated request bytes.
    buf: Vec<u8>,
}

impl IppRequestBuilder {
    /// Create a new request with the given operation-id and request-id.
    fn new(operation_id: u16, request_id: u32) -> Self {
        let mut buf = Vec::with_capacity(256);
        // version-number: IPP 1.1
        buf.push(IPP_VERSION_MAJOR);
        buf.push(IPP_VERSION_MINOR);
        // operation-id
        buf.extend_from_slice(&operation_id.to_be_bytes());
        // request-id
        buf.extend_from_slice(&request_id.to_be_bytes());
        Self { buf }
    }

    /// Start a new attribute group.
    fn begin_group(&mut self, delimiter: u8) -> &mut Self {
        self.buf.push(delimiter);
        self
    }

    /// Write a charset attribute.
    fn charset(&mut self, name: &str, value: &str) -> &mut Self {
        self.write_attr(VALUE_TAG_CHARSET, name, value.as_bytes())
    }

    /// Write a naturalLanguage attribute.
    fn natural_language(&mut self, name: &str, value: &str) -> &mut Self {
        self.write_attr(VALUE_TAG_NATURAL_LANGUAGE, name, value.as_bytes())
    }

    /// Write a URI attribute.
    fn uri(&mut self, name: &str, value: &str) -> &mut Self {
        self.write_attr(VALUE_TAG_URI, name, value.as_bytes())
    }

    /// Write a nameWithoutLanguage attribute.
    fn name_attr(&mut self, name: &str, value: &str) -> &mut Self {
        self.write_attr(VALUE_TAG_NAME, name, value.as_bytes())
    }

    /// Write a keyword attribute.
    fn keyword(&mut self, name: &str, value: &str) -> &mut Self {
        self.write_attr(VALUE_TAG_KEYWORD, name, value.as_bytes())
    }

    /// Write an enum attribute (4-byte value, same wire encoding as integer).
    fn enum_attr(&mut self, name: &str, value: i32) -> &mut Self {
        self.write_attr(VALUE_TAG_ENUM, name, &value.to_be_bytes())
    }

    /// Write a raw attribute (value-tag, name, value bytes).
    fn write_attr(&mut self, value_tag: u8, name: &str, value: &[u8]) -> &mut Self {
        // value-tag: 1 byte
        self.buf.push(value_tag);
        // name-length: 2 bytes (big-endian)
        let name_bytes = name.as_bytes();
        self.buf
            .extend_from_slice(&(name_bytes.len() as u16).to_be_bytes());
        // name
        self.buf.extend_from_slice(name_bytes);
        // value-length: 2 bytes (big-endian)
        self.buf
            .extend_from_slice(&(value.len() as u16).to_be_bytes());
        // value
        self.buf.extend_from_slice(value);
        self
    }

    /// Finalise the request: write end-of-attributes tag and return bytes.
    fn build(mut self) -> Vec<u8> {
        self.buf.push(TAG_END_OF_ATTRIBUTES);
        self.buf
    }
}

// ---------------------------------------------------------------------------
// Print-Job encoding
// ---------------------------------------------------------------------------

/// Reject a field whose byte length cannot be carried by the 16-bit length
/// prefix.  Rejection, never truncation.
fn check_field_len(attribute: &'static str, value: &[u8]) -> Result<()> {
    if value.len() > MAX_FIELD_LEN {
        return Err(QuickprintError::FieldTooLong {
            attribute,
            length: value.len(),
        });
    }
    Ok(())
}

/// Encode one Print-Job request for the given job.
///
/// Deterministic: the same request always yields byte-identical output.
/// The only failure is a caller-supplied field — the job name, or a
/// printer-uri derived from an absurdly long host — exceeding the 16-bit
/// length field.  Every other field is a fixed constant with a known
/// small footprint.
///
/// Optional job attributes keep a fixed emission order (color, then sides,
/// then orientation); an absent option contributes zero bytes.
pub fn encode_print_job(request: &PrintJobRequest) -> Result<Vec<u8>> {
    let printer_uri = format!("ipp://{}{}", request.printer_host, PRINTER_URI_PATH);

    check_field_len("job-name", request.job_name.as_bytes())?;
    check_field_len("printer-uri", printer_uri.as_bytes())?;

    let mut msg = IppRequestBuilder::new(OP_PRINT_JOB, PRINT_JOB_REQUEST_ID);

    msg.begin_group(TAG_OPERATION_ATTRIBUTES)
        .charset("attributes-charset", ATTRIBUTES_CHARSET)
        .natural_language("attributes-natural-language", ATTRIBUTES_NATURAL_LANGUAGE)
        .uri("printer-uri", &printer_uri)
        .name_attr("job-name", &request.job_name)
        .name_attr("requesting-user-name", REQUESTING_USER_NAME);

    msg.begin_group(TAG_JOB_ATTRIBUTES);
    if let Some(color) = request.color_mode {
        msg.keyword("print-color-mode", color.ipp_keyword());
    }
    if let Some(sides) = request.sides {
        msg.keyword("sides", sides.ipp_keyword());
    }
    if let Some(orientation) = request.orientation {
        msg.enum_attr("orientation-requested", orientation.ipp_enum_value());
    }

    let encoded = msg.build();
    debug!(
        bytes = encoded.len(),
        job_name = %request.job_name,
        "encoded Print-Job request"
    );
    Ok(encoded)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
