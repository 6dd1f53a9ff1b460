// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP/1.1 transport for IPP Print-Job submission.
//
// The minimal framing a printer expects: one POST whose body is the IPP
// message immediately followed by the raw document bytes, then one bounded
// read of whatever the printer sends back.  No keep-alive, no redirects,
// no chunked encoding, no interpretation of the response.
//
// There are no timeouts on connect, write, or read: an unresponsive
// printer blocks the process indefinitely.  Known limitation of this
// design, documented here rather than papered over.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use quickprint_core::error::{QuickprintError, Result};

use crate::encoder::PRINTER_URI_PATH;

/// Default IPP port (IANA-assigned).
pub const IPP_PORT: u16 = 631;

/// Upper bound on the bytes kept from the printer's response.
const MAX_RESPONSE_BYTES: usize = 8192;

/// Deliver an encoded IPP message plus document bytes to a printer.
///
/// Writes the HTTP head as a single write, then the IPP bytes, then the
/// document bytes, flushes, and performs one read of up to
/// [`MAX_RESPONSE_BYTES`].  Returns the raw response verbatim (HTTP
/// headers and body, unparsed); an empty vec means the printer closed
/// the connection without replying, which is not an error.
///
/// The stream is dropped — and the connection therefore closed — on
/// every exit path, success or failure.
pub async fn send(
    encoded: &[u8],
    document: &[u8],
    printer_host: &str,
    port: u16,
) -> Result<Vec<u8>> {
    let addr: SocketAddr = format!("{printer_host}:{port}")
        .parse()
        .map_err(|e: std::net::AddrParseError| {
            QuickprintError::Address(format!("{printer_host}: {e}"))
        })?;

    info!(
        addr = %addr,
        ipp_bytes = encoded.len(),
        document_bytes = document.len(),
        "connecting to printer"
    );

    let mut stream = TcpStream::connect(addr)
        .await
        .map_err(|e| QuickprintError::Connection(format!("connect to {addr}: {e}")))?;

    let content_length = encoded.len() + document.len();
    let http_head = format!(
        "POST {PRINTER_URI_PATH} HTTP/1.1\r\n\
         Content-Type: application/ipp\r\n\
         Host: {printer_host}\r\n\
         Content-Length: {content_length}\r\n\
         \r\n"
    );

    // write_all completes each buffer or fails; a partial write can never
    // pass as success.
    stream
        .write_all(http_head.as_bytes())
        .await
        .map_err(|e| QuickprintError::Transport(format!("write HTTP headers: {e}")))?;
    stream
        .write_all(encoded)
        .await
        .map_err(|e| QuickprintError::Transport(format!("write IPP message: {e}")))?;
    stream
        .write_all(document)
        .await
        .map_err(|e| QuickprintError::Transport(format!("write document bytes: {e}")))?;
    stream
        .flush()
        .await
        .map_err(|e| QuickprintError::Transport(format!("flush: {e}")))?;

    let mut buf = vec![0u8; MAX_RESPONSE_BYTES];
    let bytes_read = stream
        .read(&mut buf)
        .await
        .map_err(|e| QuickprintError::Transport(format!("read response: {e}")))?;
    buf.truncate(bytes_read);

    if bytes_read == 0 {
        debug!("printer closed the connection without replying");
    } else {
        debug!(bytes = bytes_read, "received printer response");
    }

    Ok(buf)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    /// Find the first occurrence of `needle` in `haystack`.
    fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }

    /// Read one HTTP request from the peer: the head as text, then exactly
    /// Content-Length body bytes.
    async fn read_http_request(stream: &mut TcpStream) -> (String, Vec<u8>) {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        let header_end = loop {
            if let Some(i) = find_subsequence(&data, b"\r\n\r\n") {
                break i;
            }
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "peer closed before end of headers");
            data.extend_from_slice(&buf[..n]);
        };

        let head = String::from_utf8(data[..header_end].to_vec()).unwrap();
        let content_length: usize = head
            .lines()
            .find(|line| line.to_ascii_lowercase().starts_with("content-length:"))
            .and_then(|line| line.split(':').nth(1))
            .and_then(|val| val.trim().parse().ok())
            .expect("request must carry Content-Length");

        let mut body = data[header_end + 4..].to_vec();
        while body.len() < content_length {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "peer closed mid-body");
            body.extend_from_slice(&buf[..n]);
        }
        (head, body)
    }

    #[tokio::test]
    async fn delivers_framing_and_returns_response_verbatim() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        const CANNED: &[u8] =
            b"HTTP/1.1 200 OK\r\nContent-Type: application/ipp\r\nContent-Length: 0\r\n\r\n";

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_http_request(&mut stream).await;
            stream.write_all(CANNED).await.unwrap();
            request
        });

        let encoded = b"\x01\x01\x00\x02fake-ipp-message".to_vec();
        let document = b"document payload".to_vec();
        let response = send(&encoded, &document, "127.0.0.1", port).await.unwrap();
        assert_eq!(response, CANNED);

        let (head, body) = server.await.unwrap();
        assert!(head.starts_with("POST /ipp/print HTTP/1.1\r\n"));
        assert!(head.contains("Content-Type: application/ipp"));
        assert!(head.contains("Host: 127.0.0.1"));
        assert!(head.contains(&format!(
            "Content-Length: {}",
            encoded.len() + document.len()
        )));

        let mut expected_body = encoded.clone();
        expected_body.extend_from_slice(&document);
        assert_eq!(body, expected_body);
    }

    #[tokio::test]
    async fn close_without_reply_is_an_empty_response_not_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let _ = read_http_request(&mut stream).await;
            // Drop the stream: connection closes with nothing written back.
        });

        let response = send(b"ipp", b"doc", "127.0.0.1", port).await.unwrap();
        assert!(response.is_empty());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn refused_connection_is_a_connection_error() {
        // Bind then drop to obtain a port nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = send(b"ipp", b"doc", "127.0.0.1", port).await.unwrap_err();
        assert!(matches!(err, QuickprintError::Connection(_)));
    }

    #[tokio::test]
    async fn unparsable_host_is_an_address_error() {
        let err = send(b"ipp", b"doc", "not-an-ip-address", IPP_PORT)
            .await
            .unwrap_err();
        assert!(matches!(err, QuickprintError::Address(_)));
    }
}
