/**
 * HTTP Request Layer
 *
 * A thin wrapper over the blocking HTTP client. Every call produces
 * either the deserialized success envelope or a `Caught`:
 *
 * - connection and decoding failures and non-2xx statuses surface as the
 *   transport library's own error type, which the classifier recognizes
 *   by its variant, not by digging through messages;
 * - nothing here shows UI or logs; the call site owns the failure.
 */
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::egui_app::config::Config;
use crate::egui_app::errors::caught::Caught;
use crate::shared::responses::SuccessBody;

pub struct ApiClient {
    http: reqwest::blocking::Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(40))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self { http, config }
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<SuccessBody<T>, Caught> {
        self.execute(self.http.get(self.config.api_url(path)))
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<SuccessBody<T>, Caught> {
        self.execute(self.http.post(self.config.api_url(path)).json(body))
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<SuccessBody<T>, Caught> {
        self.execute(self.http.put(self.config.api_url(path)).json(body))
    }

    pub fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<SuccessBody<T>, Caught> {
        self.execute(self.http.delete(self.config.api_url(path)))
    }

    fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<SuccessBody<T>, Caught> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?
            .error_for_status()?;
        Ok(response.json::<SuccessBody<T>>()?)
    }
}
