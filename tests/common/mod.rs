//! Shared helpers for integration tests: a one-shot local HTTP server.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

/// Request line and body as seen by the stub server.
#[derive(Debug)]
pub struct Received {
    pub request_line: String,
    pub body: String,
}

/// Serve exactly one request with `status` and `body`, reporting what was received.
pub fn serve_once(
    status: &'static str,
    body: impl Into<String>,
) -> (String, mpsc::Receiver<Received>) {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("request line");

        let mut content_length = 0usize;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).expect("header");
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().expect("content length");
                }
            }
        }

        let mut raw_body = vec![0u8; content_length];
        reader.read_exact(&mut raw_body).expect("body");

        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).expect("write response");

        tx.send(Received {
            request_line: request_line.trim_end().to_string(),
            body: String::from_utf8_lossy(&raw_body).into_owned(),
        })
        .ok();
    });

    (format!("http://{addr}/api/v1/products"), rx)
}

