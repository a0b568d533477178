use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::FetchError;

/// Transport that reads the body of a list endpoint.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP GET. Non-2xx responses are errors.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn client(&self) -> Result<Client, FetchError> {
        // The blocking builder defaults to 30s; `None` disables the limit.
        Ok(Client::builder().timeout(self.timeout).build()?)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client()?.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}
