use chrono::Utc;
use diagnostico_lib::sinks::{BeaconsClient, ContactSink, GoogleSheetsClient, RecordSink, SinkError};
use diagnostico_lib::survey::{Contact, Label, Response, SheetRecord};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

struct CapturedRequest {
    head: String,
    body: Value,
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

async fn read_request(socket: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = find_header_end(&buf) {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    let end = find_header_end(&buf).expect("complete request head");
    CapturedRequest {
        head: String::from_utf8_lossy(&buf[..end]).to_string(),
        body: serde_json::from_slice(&buf[end + 4..]).unwrap(),
    }
}

/// Accepts a single connection, answers with the canned status and body and
/// hands back what the client sent.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });
    (format!("http://{}", addr), handle)
}

fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

fn ana() -> Response {
    Response {
        full_name: "Ana Gomez".to_string(),
        email: "ana@x.com".to_string(),
        starting_point: "b".to_string(),
        obstacles: vec!["Falta de tiempo".to_string()],
        weekly_time: "4–6 h".to_string(),
        goal: "Ingresos extra".to_string(),
    }
}

#[tokio::test]
async fn test_beacons_posts_contact_with_bearer_token() {
    let (base, server) = serve_once("201 Created", r#"{"id":"c_1"}"#).await;
    let client = BeaconsClient::with_client(
        local_client(),
        &format!("{}/v1/", base),
        "secret-key".to_string(),
        "list-7".to_string(),
    );

    client.upsert(&Contact::build(&ana(), Label::Overwhelmed)).await.unwrap();

    let request = server.await.unwrap();
    assert!(request.head.starts_with("POST /v1/contacts HTTP/1.1"));
    assert!(request.head.to_lowercase().contains("authorization: bearer secret-key"));
    assert!(request.head.to_lowercase().contains("content-type: application/json"));
    assert_eq!(
        request.body,
        json!({
            "email": "ana@x.com",
            "first_name": "Ana",
            "last_name": "Gomez",
            "tags": ["SATURADO"],
            "list_id": "list-7"
        })
    );
}

#[tokio::test]
async fn test_beacons_rejection_is_an_error() {
    let (base, server) = serve_once("401 Unauthorized", r#"{"error":"invalid key"}"#).await;
    let client = BeaconsClient::with_client(local_client(), &base, "wrong".to_string(), "list-7".to_string());

    let err = client.upsert(&Contact::build(&ana(), Label::Stuck)).await.unwrap_err();

    match err {
        SinkError::Rejected { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid key"));
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_sheets_ignores_the_response_status() {
    let (base, server) = serve_once("500 Internal Server Error", "{}").await;
    let client = GoogleSheetsClient::with_client(local_client(), format!("{}/macros/s/abc/exec", base));
    let record = SheetRecord::build(&ana(), Label::Overwhelmed, Utc::now());

    client.append(&record).await.unwrap();

    let request = server.await.unwrap();
    assert!(request.head.starts_with("POST /macros/s/abc/exec HTTP/1.1"));
    assert_eq!(request.body["nombre"], "Ana Gomez");
    assert_eq!(request.body["etiqueta"], "SATURADO");
    assert_eq!(request.body["pregunta1"], "Tengo ideas, pero sin estructura");
    assert_eq!(request.body["pregunta2"], "Falta de tiempo");
}

#[tokio::test]
async fn test_sheets_unreachable_endpoint_is_a_transport_error() {
    // Grab a free port, then close it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GoogleSheetsClient::with_client(local_client(), format!("http://{}/exec", addr));
    let record = SheetRecord::build(&ana(), Label::Overwhelmed, Utc::now());

    let err = client.append(&record).await.unwrap_err();
    assert!(matches!(err, SinkError::Transport(_)));
}
