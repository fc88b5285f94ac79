//! Offline transport shared by the integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use marketwire_core::{
    ClientConfig, HttpClient, HttpError, HttpRequest, HttpResponse, MarketDataClient,
};

pub const TEST_BASE_URL: &str = "http://marketwire.test";

/// Replays one canned response for every request and records what was sent.
#[derive(Debug)]
pub struct FixtureHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FixtureHttpClient {
    pub fn json(body: impl Into<String>) -> Arc<Self> {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(HttpResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(HttpError::new(message)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for FixtureHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

pub fn client_for(transport: &Arc<FixtureHttpClient>) -> MarketDataClient {
    MarketDataClient::with_http_client(
        transport.clone(),
        ClientConfig::default().with_base_url(TEST_BASE_URL),
    )
}
