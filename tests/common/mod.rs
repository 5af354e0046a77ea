//! Faux backend REST (actix-web) : rejoue des réponses préparées et
//! enregistre chaque requête reçue.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

use villes_admin::models::Resource;
use villes_admin::{ApplicationConfig, EntityService};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

struct CannedResponse {
    status: u16,
    body: Option<String>,
}

#[derive(Default)]
struct MockState {
    responses: Mutex<VecDeque<CannedResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockBackend {
    pub base_url: String,
    state: web::Data<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = web::Data::new(MockState::default());
        let data = state.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(handle))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let port = server.addrs()[0].port();
        actix_web::rt::spawn(server.run());

        Self {
            base_url: format!("http://127.0.0.1:{}/", port),
            state,
        }
    }

    /// Prochaine réponse : statut + corps JSON
    pub fn respond_json(&self, status: u16, body: serde_json::Value) {
        self.push(status, Some(body.to_string()));
    }

    /// Prochaine réponse : statut sans corps
    pub fn respond_empty(&self, status: u16) {
        self.push(status, None);
    }

    pub fn respond_text(&self, status: u16, body: &str) {
        self.push(status, Some(body.to_string()));
    }

    fn push(&self, status: u16, body: Option<String>) {
        self.state
            .responses
            .lock()
            .unwrap()
            .push_back(CannedResponse { status, body });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request received")
    }

    pub fn service<E: Resource>(&self) -> EntityService<E> {
        let config = ApplicationConfig::new(&self.base_url).unwrap();
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        EntityService::with_client(http, &config).unwrap()
    }
}

async fn handle(req: HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        content_type: req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).to_string(),
    });

    let canned = state
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or(CannedResponse { status: 404, body: None });

    let mut builder = HttpResponse::build(StatusCode::from_u16(canned.status).unwrap());
    match canned.body {
        Some(body) => builder.content_type("application/json").body(body),
        None => builder.finish(),
    }
}
