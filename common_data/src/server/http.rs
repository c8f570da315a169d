use crate::server::data::telemetry::TelemetrySnapshot;

use serde_json;

use reqwest;

/// Typed client for the mock telemetry endpoint.
pub struct TelemetryClient {
    server_address: String,
    client: reqwest::Client,
}

#[derive(Debug)]
pub enum HttpErrors {
    ServerError,
    BadRequest,
    BadResponse,
    UnexpectedStatus(u16),
}

impl TelemetryClient {
    pub fn new(server_address: String) -> TelemetryClient {
        let server_address = server_address.trim_end_matches('/').to_string();

        return TelemetryClient {
            server_address,
            client: reqwest::Client::new(),
        };
    }

    pub fn telemetry_url(&self) -> String {
        return self.server_address.clone() + "/telemetry";
    }

    pub async fn fetch_telemetry(&self) -> Result<TelemetrySnapshot, HttpErrors> {
        let reqwest_raw = self.client.get(self.telemetry_url()).send().await;

        let response = match reqwest_raw {
            Ok(r) => r,
            Err(_) => return Err(HttpErrors::BadRequest),
        };

        let status = response.status();

        if !status.is_success() {
            return Err(HttpErrors::UnexpectedStatus(status.as_u16()));
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return Err(HttpErrors::ServerError),
        };

        match serde_json::from_str::<TelemetrySnapshot>(&body) {
            Ok(snapshot) => Ok(snapshot),
            Err(_) => Err(HttpErrors::BadResponse),
        }
    }
}
