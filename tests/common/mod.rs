//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use groupie_tracker::config::AppConfig;
use groupie_tracker::{HttpServer, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const ARTISTS_JSON: &str = r#"[
    {"id": 1, "image": "https://example.com/queen.jpeg", "name": "Queen",
     "members": ["Freddie Mercury", "Brian May"], "creationDate": 1970, "firstAlbum": "14-12-1973"},
    {"id": 2, "image": "https://example.com/muse.jpeg", "name": "Muse",
     "members": ["Matt Bellamy"], "creationDate": 1994, "firstAlbum": "04-10-1999"},
    {"id": 3, "image": "https://example.com/floyd.jpeg", "name": "Pink Floyd",
     "members": ["Roger Waters", "David Gilmour", "Nick Mason", "Richard Wright"], "creationDate": 1965, "firstAlbum": "05-08-1967"}
]"#;

pub const RELATIONS_JSON: &str = r#"{"index": [
    {"id": 1, "datesLocations": {"london-uk": ["13-07-1985"], "budapest-hungary": ["27-07-1986"]}},
    {"id": 2, "datesLocations": {"paris-france": ["05-06-2023", "06-06-2023"]}}
]}"#;

/// Read the request head and return its path.
async fn read_path(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") && head.len() < 16 * 1024 {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head)
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string()
}

/// Start a mock upstream that writes the returned bytes verbatim.
///
/// The handler receives the bound address and the request path and must
/// produce the whole HTTP response, head included.
pub async fn start_raw_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(SocketAddr, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = String> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let path = read_path(&mut socket).await;
                        let response = f(addr, path).await;
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock upstream whose status and body depend on the request path.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(SocketAddr, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let f = Arc::new(f);
    start_raw_upstream(move |addr, path| {
        let f = f.clone();
        async move {
            let (status, body) = f(addr, path).await;
            let status_text = match status {
                200 => "200 OK",
                404 => "404 Not Found",
                500 => "500 Internal Server Error",
                _ => "200 OK",
            };
            format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_text,
                body.len(),
                body
            )
        }
    })
    .await
}

/// Response of a well-behaved upstream for `path`.
pub fn fixture_response(addr: SocketAddr, path: &str) -> (u16, String) {
    match path {
        "/api" => (
            200,
            format!(
                r#"{{"artists": "http://{addr}/api/artists", "locations": "http://{addr}/api/locations",
                    "dates": "http://{addr}/api/dates", "relation": "http://{addr}/api/relation"}}"#
            ),
        ),
        "/api/artists" => (200, ARTISTS_JSON.to_string()),
        "/api/relation" => (200, RELATIONS_JSON.to_string()),
        _ => (404, "404 page not found".to_string()),
    }
}

/// Start a mock upstream serving the fixture data.
pub async fn start_mock_upstream() -> SocketAddr {
    start_programmable_upstream(|addr, path| async move { fixture_response(addr, &path) }).await
}

/// Config pointing at `upstream`, with the repository's templates and assets.
pub fn config_for(upstream: SocketAddr) -> AppConfig {
    let mut config = AppConfig::default();
    config.upstream.base_url = format!("http://{}/api", upstream);
    config.upstream.timeout_secs = Some(5);
    config.templates.dir = concat!(env!("CARGO_MANIFEST_DIR"), "/templates").to_string();
    config.assets.dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string();
    config
}

/// Fresh template directory holding `files`.
pub fn scratch_template_dir(files: &[(&str, &str)]) -> String {
    let dir = std::env::temp_dir().join(format!("groupie-templates-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    for (name, source) in files {
        std::fs::write(dir.join(name), source).unwrap();
    }
    dir.to_string_lossy().into_owned()
}

/// Start the server on an ephemeral port.
///
/// Keep the returned `Shutdown` alive for as long as the server should run.
pub async fn start_server(config: AppConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client that does not follow redirects.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
