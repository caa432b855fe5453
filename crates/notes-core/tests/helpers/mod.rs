//! In-process HTTP backend used by the API client tests.
//!
//! Speaks just enough HTTP/1.1 to serve the `/notes` resource from memory.
//! Every response closes the connection, so each client request arrives on a
//! fresh socket and is recorded in order.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct Backend {
    notes: Vec<Value>,
    next_id: u64,
    requests: Vec<RecordedRequest>,
    canned: Option<(u16, String)>,
}

#[derive(Clone)]
pub struct MockNotesServer {
    pub base_url: String,
    backend: Arc<Mutex<Backend>>,
}

impl MockNotesServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let address = listener.local_addr().expect("local address");
        let backend = Arc::new(Mutex::new(Backend {
            next_id: 1,
            ..Backend::default()
        }));

        let accept_backend = Arc::clone(&backend);
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let backend = Arc::clone(&accept_backend);
                tokio::spawn(async move {
                    handle_connection(socket, backend).await;
                });
            }
        });

        Self {
            base_url: format!("http://{address}"),
            backend,
        }
    }

    /// Answer every following request with `status` and a raw `body`.
    pub fn respond_with(&self, status: u16, body: &str) {
        self.backend.lock().unwrap().canned = Some((status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.backend.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("at least one request")
    }
}

async fn handle_connection(mut socket: TcpStream, backend: Arc<Mutex<Backend>>) {
    let Some(request) = read_request(&mut socket).await else {
        return;
    };
    let (status, body) = {
        let mut backend = backend.lock().unwrap();
        backend.requests.push(request.clone());
        route(&mut backend, &request)
    };
    let response = format!(
        "HTTP/1.1 {status} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        reason(status),
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 4096];

    let header_end = loop {
        let read = socket.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(position) = find_header_end(&buffer) {
            break position;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(name, _)| name == "content-length")
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buffer.len() < body_start + content_length {
        let read = socket.read(&mut chunk).await.ok()?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
    }
    let body_end = buffer.len().min(body_start + content_length);
    let body = String::from_utf8_lossy(&buffer[body_start..body_end]).to_string();

    Some(RecordedRequest {
        method,
        target,
        headers,
        body,
    })
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

fn route(backend: &mut Backend, request: &RecordedRequest) -> (u16, String) {
    if let Some((status, body)) = backend.canned.clone() {
        return (status, body);
    }

    let (path, query) = request
        .target
        .split_once('?')
        .unwrap_or((request.target.as_str(), ""));
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (request.method.as_str(), segments.as_slice()) {
        ("GET", ["notes"]) => {
            let search = query
                .split('&')
                .find_map(|pair| pair.strip_prefix("search="))
                .map(|raw| urlencoding::decode(raw).expect("utf-8 query").into_owned());
            let notes: Vec<&Value> = backend
                .notes
                .iter()
                .filter(|note| search.as_deref().map_or(true, |term| note_matches(note, term)))
                .collect();
            (200, json!(notes).to_string())
        }
        ("POST", ["notes"]) => {
            let Ok(Value::Object(mut fields)) = serde_json::from_str::<Value>(&request.body) else {
                return (400, json!({ "error": "invalid body" }).to_string());
            };
            // mockapi-style string ids
            fields.insert("id".to_string(), json!(backend.next_id.to_string()));
            fields.insert("createdAt".to_string(), json!("2024-01-01T00:00:00.000Z"));
            backend.next_id += 1;
            let note = Value::Object(fields);
            backend.notes.push(note.clone());
            (201, note.to_string())
        }
        ("PUT", ["notes", id]) => {
            let Ok(Value::Object(changes)) = serde_json::from_str::<Value>(&request.body) else {
                return (400, json!({ "error": "invalid body" }).to_string());
            };
            match find_note(backend, id) {
                Some(index) => {
                    let note = backend.notes[index]
                        .as_object_mut()
                        .expect("stored notes are objects");
                    for (key, value) in changes {
                        if key != "id" {
                            note.insert(key, value);
                        }
                    }
                    (200, backend.notes[index].to_string())
                }
                None => (404, "\"Not found\"".to_string()),
            }
        }
        ("DELETE", ["notes", id]) => match find_note(backend, id) {
            Some(index) => {
                let removed = backend.notes.remove(index);
                (200, removed.to_string())
            }
            None => (404, "\"Not found\"".to_string()),
        },
        _ => (404, "\"Not found\"".to_string()),
    }
}

fn find_note(backend: &Backend, id: &str) -> Option<usize> {
    backend
        .notes
        .iter()
        .position(|note| note["id"].as_str() == Some(id))
}

fn note_matches(note: &Value, term: &str) -> bool {
    ["title", "content"].iter().any(|field| {
        note[*field]
            .as_str()
            .is_some_and(|text| text.to_lowercase().contains(&term.to_lowercase()))
    })
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
