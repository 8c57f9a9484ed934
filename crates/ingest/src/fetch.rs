//! Fetch capability.
//!
//! The pipeline only needs "GET this URL, give me the status and the body".
//! [`HttpFetcher`] does that over HTTP with reqwest; tests plug in scripted
//! implementations.

use std::time::Duration;

use futures_util::future::BoxFuture;

use crate::error::FetchError;

/// A complete response, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Fetcher: Send + Sync + 'static {
    /// Issue one GET for `url`. Implementations must not retry.
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FetchResponse, FetchError>>;
}

/// reqwest-backed fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client. `timeout` bounds the whole request, including reading
    /// the body; `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FetchResponse, FetchError>> {
        Box::pin(async move {
            let resp = self.client.get(url).send().await.map_err(transport_error)?;
            let status = resp.status().as_u16();
            let body = resp.bytes().await.map_err(transport_error)?;
            Ok(FetchResponse {
                status,
                body: body.to_vec(),
            })
        })
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Connection(with_causes(&err))
    }
}

/// `err` followed by every distinct message in its source chain, so the root
/// cause (e.g. "Connection refused") is not lost behind a generic wrapper.
fn with_causes(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
