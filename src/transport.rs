use async_trait::async_trait;
use reqwest::Client;

use crate::constants::USER_AGENT;
use crate::error::WeatherError;

/// Raw upstream reply: status code plus the unparsed body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for any 4xx or 5xx status
    pub fn is_error_status(&self) -> bool {
        self.status >= 400
    }
}

/// Outbound HTTP capability handed to the geocoding and forecast clients.
///
/// Implementations return every completed exchange, whatever its status; only
/// failures to complete the exchange are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, WeatherError>;
}

/// Production transport backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, WeatherError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("GET {} -> {}", url, status);

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Recording transport double used by unit tests
#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    pub(crate) enum Reply {
        Status(u16, String),
        Fail(String),
    }

    impl Reply {
        pub(crate) fn ok(body: impl Into<String>) -> Self {
            Self::Status(200, body.into())
        }

        pub(crate) fn json(body: &serde_json::Value) -> Self {
            Self::ok(body.to_string())
        }
    }

    /// Answers requests whose URL starts with a registered prefix
    #[derive(Debug, Default)]
    pub(crate) struct StubTransport {
        routes: Vec<(String, Reply)>,
        requests: Mutex<Vec<String>>,
    }

    impl StubTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn route(mut self, prefix: &str, reply: Reply) -> Self {
            self.routes.push((prefix.to_string(), reply));
            self
        }

        pub(crate) fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        pub(crate) fn requests_to(&self, prefix: &str) -> usize {
            self.requests()
                .iter()
                .filter(|url| url.starts_with(prefix))
                .count()
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, WeatherError> {
            self.requests.lock().unwrap().push(url.to_string());

            let reply = self
                .routes
                .iter()
                .find(|(prefix, _)| url.starts_with(prefix.as_str()))
                .map(|(_, reply)| reply.clone());

            match reply {
                Some(Reply::Status(status, body)) => Ok(HttpResponse { status, body }),
                Some(Reply::Fail(message)) => Err(WeatherError::transport(message)),
                None => Err(WeatherError::transport(format!("no route for {}", url))),
            }
        }
    }
}
