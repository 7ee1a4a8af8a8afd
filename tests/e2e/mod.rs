//! End-to-end test utilities.
//!
//! Each test gets its own SQLite file in a temporary directory and a server on
//! an ephemeral port. Requests are written as raw HTTP/1.1 so the tests see
//! exactly what a browser would.

use contact_manager::{build_app, Config};
use std::net::SocketAddr;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// A running server backed by a throwaway database.
pub struct TestServer {
    pub addr: SocketAddr,
    pub config: Config,
    _dir: TempDir,
}

/// Parsed HTTP response.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[allow(dead_code)]
impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// `Location` header, panicking if absent.
    pub fn location(&self) -> &str {
        self.header("location").expect("response has Location header")
    }

    /// Full `Set-Cookie` header for cookie `name`.
    pub fn set_cookie(&self, name: &str) -> Option<&str> {
        let prefix = format!("{name}=");
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("set-cookie"))
            .map(|(_, v)| v.as_str())
            .find(|v| v.starts_with(&prefix))
    }

    /// `name=value` pair of cookie `name`, as a browser would send it back.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.set_cookie(name)
            .map(|v| v.split(';').next().unwrap_or(v).trim())
    }
}

#[allow(dead_code)]
impl TestServer {
    pub async fn start() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config {
            database_path: dir.path().join("contacts.db"),
            ..Config::default()
        };
        let app = build_app(&config).expect("build app");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

        Self {
            addr,
            config,
            _dir: dir,
        }
    }

    pub async fn get(&self, path: &str) -> RawResponse {
        send_raw(self.addr, "GET", path, None, None).await
    }

    /// GET sending a `Cookie` header.
    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> RawResponse {
        send_raw(self.addr, "GET", path, Some(cookie), None).await
    }

    /// POST a urlencoded form.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> RawResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        send_raw(self.addr, "POST", path, None, Some(&body)).await
    }

    /// Count of rows in the `contacts` table, read straight from SQLite.
    pub fn row_count(&self) -> i64 {
        let conn = rusqlite::Connection::open(&self.config.database_path).expect("open db");
        conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))
            .expect("count rows")
    }

    /// Id of the first contact with `name`.
    pub fn id_of(&self, name: &str) -> i64 {
        let conn = rusqlite::Connection::open(&self.config.database_path).expect("open db");
        conn.query_row(
            "SELECT id FROM contacts WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .expect("contact exists")
    }

    /// Drop the `contacts` table behind the server's back.
    pub fn drop_contacts_table(&self) {
        let conn = rusqlite::Connection::open(&self.config.database_path).expect("open db");
        conn.execute_batch("DROP TABLE contacts").expect("drop table");
    }

    /// Stored phone of contact `id`.
    pub fn phone_of(&self, id: i64) -> Option<String> {
        let conn = rusqlite::Connection::open(&self.config.database_path).expect("open db");
        conn.query_row("SELECT phone FROM contacts WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .expect("contact exists")
    }
}

async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    cookie: Option<&str>,
    form: Option<&str>,
) -> RawResponse {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(cookie) = cookie {
        req.push_str(&format!("Cookie: {cookie}\r\n"));
    }
    if let Some(body) = form {
        req.push_str("Content-Type: application/x-www-form-urlencoded\r\n");
        req.push_str(&format!("Content-Length: {}\r\n\r\n{}", body.len(), body));
    } else {
        req.push_str("\r\n");
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.expect("read response");
    let text = String::from_utf8_lossy(&raw).to_string();

    let (head, body) = text.split_once("\r\n\r\n").unwrap_or((text.as_str(), ""));
    let mut lines = head.lines();
    let status = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|code| code.parse::<u16>().ok())
        .expect("status line");
    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    RawResponse {
        status,
        headers,
        body: body.to_string(),
    }
}
