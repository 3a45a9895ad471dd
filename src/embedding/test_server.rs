// Scripted HTTP endpoint for embedding tests
//
// Answers each incoming connection with the next canned response and hands the
// raw requests back once every response has been served.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

pub struct ScriptedServer {
    pub base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl ScriptedServer {
    /// Serve `responses` as `(status line, JSON body)` pairs, one per connection
    pub fn start(responses: Vec<(&'static str, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind scripted server");
        let base_url = format!(
            "http://{}",
            listener.local_addr().expect("scripted server address")
        );

        let handle = thread::spawn(move || {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener
                    .accept()
                    .expect("client never connected to scripted server");
                requests.push(read_request(&mut stream));

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream
                    .write_all(response.as_bytes())
                    .expect("write scripted response");
                stream.flush().expect("flush scripted response");
            }
            requests
        });

        Self { base_url, handle }
    }

    pub fn ok(body: &str) -> Self {
        Self::start(vec![("200 OK", body.to_string())])
    }

    /// Raw requests received, in arrival order
    pub fn requests(self) -> Vec<String> {
        self.handle.join().expect("scripted server thread panicked")
    }
}

/// Address nothing listens on
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind unused port");
    let url = format!("http://{}", listener.local_addr().expect("unused port address"));
    drop(listener);
    url
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).expect("read request from client");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
