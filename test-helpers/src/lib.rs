pub mod telemetry;

use actix_web::dev::Server;
use actix_web::{App, HttpResponse, HttpServer, web};
use payloads::JsonClient;
use serde_json::{Value, json};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Login of the fixture user with a complete profile.
pub const ADA: &str = "ada";
/// Login of the fixture user whose profile is an empty object.
pub const BLANK: &str = "blank";
pub const ADA_BIO: &str = "Analyst of the Analytical Engine.";

/// A stub JSON server running in the background of a test.
pub struct StubServer {
    pub port: u16,
    pub client: JsonClient,
    hits: web::Data<AtomicUsize>,
}

impl StubServer {
    /// Absolute URL for `path` on this server. `path` starts with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{path}", self.port)
    }

    pub fn user_url(&self, login: &str) -> String {
        self.url(&format!("/users/{login}"))
    }

    /// Number of requests the server has answered so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Spawn the stub server on an OS-assigned port.
///
/// Routes:
/// - `GET /users/{login}`: the fixture profile for `ada` or `blank`, or a
///   404 with a JSON `{"message": "Not Found"}` body for anyone else
/// - `GET /not-json`: a 200 with an HTML body
pub async fn spawn_stub_server() -> StubServer {
    telemetry::init_test_tracing();

    let hits = web::Data::new(AtomicUsize::new(0));
    let (server, port) =
        build(hits.clone()).expect("Failed to bind stub server");
    tokio::spawn(server);

    StubServer {
        port,
        client: JsonClient::new(),
        hits,
    }
}

/// Build the server, but not await it. Returns the bound port alongside.
fn build(hits: web::Data<AtomicUsize>) -> std::io::Result<(Server, u16)> {
    // OS assigns the port if binding to 0
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(hits.clone())
            .route("/users/{login}", web::get().to(user_profile))
            .route("/not-json", web::get().to(not_json))
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok((server, port))
}

/// The JSON document served for a fixture login, if any.
pub fn fixture_profile(login: &str) -> Option<Value> {
    match login {
        ADA => Some(json!({
            "login": ADA,
            "id": 1815,
            "name": "Ada",
            "bio": ADA_BIO,
            "public_repos": 1,
        })),
        BLANK => Some(json!({})),
        _ => None,
    }
}

async fn user_profile(
    login: web::Path<String>,
    hits: web::Data<AtomicUsize>,
) -> HttpResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    tracing::debug!("Stub server: profile requested for {login}");
    match fixture_profile(&login) {
        Some(body) => HttpResponse::Ok().json(body),
        None => HttpResponse::NotFound().json(json!({"message": "Not Found"})),
    }
}

async fn not_json(hits: web::Data<AtomicUsize>) -> HttpResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    HttpResponse::Ok()
        .content_type("text/html")
        .body("<html><body>not json</body></html>")
}

/// Returns an address on which nothing is listening.
pub fn closed_port_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{port}/users/{ADA}"))
}
