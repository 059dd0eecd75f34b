//! HTTP access to the drink shop backend.
//!
//! Every call is a single attempt returning [`ClientResult`]; retrying or
//! timing out differently is left to whoever wraps the client.

pub mod catalog;
pub mod members;
pub mod orders;
pub mod reservations;

use std::time::Duration;
use log::{debug, warn};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::client::controller::error::{ClientError, ClientResult};
use crate::client::model::config::ClientConfig;

pub const GET_ALL_BRANCHES: &str = "api/getAllBranches";
pub const GET_ALL_RECIPES: &str = "api/getAllRecipes";
pub const GET_TYPES: &str = "api/getTypes";
pub const GET_ITEMS: &str = "api/getItems";
pub const GET_AVAILABLE_BRANCHES: &str = "api/getAvailableBranches";
pub const SUBMIT_ORDER: &str = "api/submitOrder";
pub const POST_ORDER: &str = "api/postOrder";
pub const MAKE_RESERVATION: &str = "api/makeReservation";
pub const LOGIN: &str = "api/login";
pub const SIGN_UP: &str = "api/signup";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<T> {
        debug!("GET {}", path);
        let res = self.client.get(self.url(path)).query(query).send().await?;
        Self::decode(Self::check(path, res).await?).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let res = self.send_json(path, body).await?;
        Self::decode(Self::check(path, res).await?).await
    }

    /// POST whose response body carries nothing we need
    async fn post_ack<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let res = self.send_json(path, body).await?;
        Self::check(path, res).await.map(|_| ())
    }

    async fn send_json<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<Response> {
        debug!("POST {}", path);
        // encode up front so a bad payload is a decode error rather than a transport one
        let body = serde_json::to_vec(body)?;
        Ok(self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?)
    }

    async fn check(path: &str, res: Response) -> ClientResult<Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let text = res.text().await.unwrap_or_default();
        warn!("{} answered {}, {}", path, status, text);
        Err(ClientError::Status(status))
    }

    /// Like `check`, but only a plain 200 counts
    async fn check_ok(path: &str, res: Response) -> ClientResult<Response> {
        let res = Self::check(path, res).await?;
        let status = res.status();
        if status != StatusCode::OK {
            warn!("{} answered {}, expected 200", path, status);
            return Err(ClientError::Status(status));
        }
        Ok(res)
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> ClientResult<T> {
        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::{Arc, Mutex};
    use actix_web::{web, App, HttpServer};
    use serde_json::Value;
    use super::ApiClient;
    use crate::client::model::config::ClientConfig;

    /// Bodies the mock backend received, in arrival order
    #[derive(Clone, Default)]
    pub(crate) struct Recorder(Arc<Mutex<Vec<(String, Value)>>>);

    impl Recorder {
        pub fn record(&self, path: &str, body: Value) {
            self.0.lock().unwrap().push((path.to_string(), body));
        }

        pub fn take(&self) -> Vec<(String, Value)> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    /// Serve `configure` on an ephemeral port and point a client at it
    pub(crate) async fn start<F>(configure: F) -> (ApiClient, Recorder)
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        let recorder = Recorder::default();
        let data = web::Data::new(recorder.clone());
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .configure(configure.clone())
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("failed to bind mock backend");
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        let config = ClientConfig::new(format!("http://{}", addr), 5, "unused.json");
        (ApiClient::new(&config).unwrap(), recorder)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::{web, HttpResponse};

    #[actix_web::test]
    async fn non_success_status_is_typed() {
        let (client, _) = mock::start(|cfg| {
            cfg.route("/api/getTypes", web::get().to(|| async { HttpResponse::ServiceUnavailable().finish() }));
        })
        .await;
        match client.get_types().await {
            Err(ClientError::Status(status)) => assert_eq!(status.as_u16(), 503),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[actix_web::test]
    async fn malformed_body_is_a_decode_error() {
        let (client, _) = mock::start(|cfg| {
            cfg.route("/api/getTypes", web::get().to(|| async { HttpResponse::Ok().body("{not json") }));
        })
        .await;
        assert!(matches!(client.get_types().await, Err(ClientError::Decode(_))));
    }

    #[actix_web::test]
    async fn unreachable_backend_is_a_transport_error() {
        let config = ClientConfig::new("http://127.0.0.1:1", 1, "unused.json");
        let client = ApiClient::new(&config).unwrap();
        assert!(matches!(client.get_types().await, Err(ClientError::Transport(_))));
    }
}
