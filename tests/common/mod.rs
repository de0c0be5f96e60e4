#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{self, Cursor, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use base64::engine::general_purpose;
use base64::Engine;
use image::{ImageFormat, Rgb, RgbImage};
use serde_json::{json, Value};
use tracing_subscriber::fmt::MakeWriter;

use spiralwick_pins::Config;

pub const CHAT_PATH: &str = "/v1/chat/completions";
pub const IMAGE_PATH: &str = "/v1/images/generations";
pub const PINS_PATH: &str = "/v5/pins";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub auth: Option<String>,
    pub body: Value,
}

/// In-process stand-in for the text, image and pin services.
pub struct StubServer {
    pub base_url: String,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    /// Serve each `(path, status, body)` as a canned POST response.
    pub async fn spawn(routes: Vec<(&'static str, StatusCode, Value)>) -> Self {
        let log: Arc<Mutex<Vec<Recorded>>> = Arc::new(Mutex::new(Vec::new()));
        let mut router = Router::new();
        for (path, status, body) in routes {
            let log = log.clone();
            router = router.route(
                path,
                post(move |headers: HeaderMap, Json(req): Json<Value>| {
                    let log = log.clone();
                    let body = body.clone();
                    async move {
                        log.lock().unwrap().push(Recorded {
                            path: path.to_string(),
                            auth: headers
                                .get("authorization")
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string),
                            body: req,
                        });
                        (status, Json(body))
                    }
                }),
            );
        }

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        listener.set_nonblocking(true).expect("nonblocking listener");
        let addr = listener.local_addr().expect("stub addr");
        let server = axum::Server::from_tcp(listener)
            .expect("stub server")
            .serve(router.into_make_service());
        tokio::spawn(async move {
            let _ = server.await;
        });

        StubServer { base_url: format!("http://{}", addr), log }
    }

    pub fn requests(&self, path: &str) -> Vec<Recorded> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    pub fn hits(&self, path: &str) -> usize {
        self.requests(path).len()
    }

    /// Config pointing both services at this stub, plus `extra` overrides.
    pub fn config(&self, extra: &[(&str, &str)]) -> Config {
        let mut env: HashMap<String, String> = HashMap::new();
        env.insert("OPENAI_BASE_URL".into(), format!("{}/v1", self.base_url));
        env.insert("PINTEREST_BASE_URL".into(), format!("{}/v5", self.base_url));
        for (k, v) in extra {
            env.insert(k.to_string(), v.to_string());
        }
        Config::from_lookup(|key| env.get(key).cloned())
    }
}

pub const FULL_CREDENTIALS: [(&str, &str); 4] = [
    ("OPENAI_API_KEY", "sk-test-0123456789"),
    ("PINTEREST_ACCESS_TOKEN", "pina-test-0123456789"),
    ("PINTEREST_BOARD_ID", "board-123"),
    ("SPIRALWICK_STORE_URL", "https://shop.example.com/candles"),
];

pub fn chat_reply(content: &str) -> Value {
    json!({ "choices": [ { "message": { "role": "assistant", "content": content } } ] })
}

pub fn structured_copy() -> Value {
    chat_reply(
        r#"{"title":"Blush Bubble Candle","description":"A soft pink bubble cube.","alt":"pink bubble candle on marble"}"#,
    )
}

pub fn test_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([12, 34, 56]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}

pub fn image_reply(png: &[u8]) -> Value {
    json!({ "data": [ { "b64_json": general_purpose::STANDARD.encode(png) } ] })
}

/// Collects formatted log output so tests can assert on emitted lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Install an INFO-level subscriber writing here for the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.lines().iter().filter(|l| l.contains(needle)).count()
    }
}

pub struct LogWriter(Arc<Mutex<Vec<u8>>>);

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter(self.0.clone())
    }
}
