// common/mod.rs - Shared test utilities for the HTTP client suites
//
// Each suite starts a real actix-web server on an ephemeral port, mounts the
// routes it needs, and points the clients at it. Requests are recorded so
// tests can assert on the exact path and query string that went out.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpRequest, HttpServer};

/// Every request URI (path plus raw query) seen by the mock backend, in order
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    pub fn record(&self, req: &HttpRequest) {
        self.0
            .lock()
            .unwrap()
            .push(req.uri().to_string());
    }

    pub fn requests(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.0.lock().unwrap().last().cloned()
    }
}

/// A running mock backend
pub struct TestServer {
    pub base_url: String,
    pub recorder: Recorder,
    handle: ServerHandle,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Start a mock backend with the given routes on 127.0.0.1:<random>
///
/// The recorder is registered as app data so handlers can take
/// `web::Data<Recorder>`.
pub async fn spawn_backend<F>(routes: F) -> anyhow::Result<TestServer>
where
    F: Fn(&mut web::ServiceConfig) + Clone + Send + 'static,
{
    let recorder = Recorder::default();
    let data = web::Data::new(recorder.clone());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes.clone())
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("test server did not bind"))?;
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        recorder,
        handle,
    })
}
