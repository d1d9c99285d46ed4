use crate::messages::MessageLog;
use crate::router::AppState;
use crate::service::HouseService;
use astra::{Body, Request, Response};
use std::io::Read;
use std::io::Write;
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Scenario fixture: one listing as the API would return it.
pub const ONE_HOUSE_JSON: &str = r#"[{"id":1,"address":"1 Main St","zipcode":12345,"city":"Springfield","property_value":200000,"money_raised":50000,"asking_price":210000,"tags":["starter"]}]"#;

/// Scenario fixture: the record a successful create echoes back.
pub const CREATED_HOUSE_JSON: &str = r#"{"id":42,"address":"9 Elm St","zipcode":55101,"city":"St Paul","property_value":180000,"money_raised":0,"asking_price":190000,"tags":["fixer","riverside"]}"#;

/// One-response stub API on an ephemeral local port: every request
/// gets the same canned JSON response. Requests the stub saw are
/// reported back (head plus body) so tests can assert on what the
/// service actually sent.
pub struct StubApi {
    pub base_url: String,
    requests: mpsc::Receiver<String>,
}

impl StubApi {
    pub fn serve_json(status: u16, body: &str) -> StubApi {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener addr");
        let (tx, rx) = mpsc::channel();

        let canned = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n{body}",
            reason = reason(status),
            len = body.len(),
        );

        // Detached; dies with the test process.
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let request = read_request(&mut stream);
                let _ = tx.send(request);
                let _ = stream.write_all(canned.as_bytes());
            }
        });

        StubApi {
            base_url: format!("http://{addr}"),
            requests: rx,
        }
    }

    /// The next request the stub saw, request line through body.
    pub fn next_request(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("stub saw no request")
    }
}

/// A base URL with nothing listening behind it.
pub fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn make_state(base_url: &str) -> AppState {
    let messages = MessageLog::new();
    let service = HouseService::new(base_url, messages.clone()).expect("build service");
    AppState { service, messages }
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(path)
        .body(Body::new(""))
        .expect("build GET request")
}

pub fn post_form(path: &str, form: &str) -> Request {
    http::Request::builder()
        .method(http::Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::new(form.to_string()))
        .expect("build POST request")
}

pub fn read_body(resp: Response) -> String {
    let mut buf = Vec::new();
    let mut body = resp.into_body();
    body.reader().read_to_end(&mut buf).expect("read body");
    String::from_utf8(buf).expect("utf8 body")
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        match stream.read(&mut byte) {
            Ok(1) => head.push(byte[0]),
            _ => break,
        }
    }
    let head = String::from_utf8_lossy(&head).to_string();

    let len = content_length(&head);
    let mut body = vec![0u8; len];
    if len > 0 {
        let _ = stream.read_exact(&mut body);
    }

    format!("{head}{}", String::from_utf8_lossy(&body))
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
