pub mod assignments;
pub mod calendar;
mod config;
pub mod courses;
pub mod pagination;
pub mod submissions;
pub mod timestamp;

pub use config::{Config, Token};

use log::debug;
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header::LINK;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A client, for using the Canvas LMS REST API
pub struct Client {
    config: Config,
    http: HttpClient,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing configuration: {}", .0)]
    Configuration(&'static str),

    #[error("http error: {}", .0)]
    Http(#[from] reqwest::Error),

    #[error("serde error: {}", .0)]
    Serde(#[from] serde_json::Error),
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(Policy::limited(10))
            .build()?;

        Ok(Client { config, http })
    }

    fn get_page(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .bearer_auth(self.config.token())
            .query(query)
            .send()?;

        Ok(resp.error_for_status()?)
    }

    /// Walk every page of a list endpoint, concatenating records in page
    /// order then within-page order.
    ///
    /// Canvas advertises the next page in the `Link` response header; the
    /// walk stops once no `next` relation remains. `query` applies to the
    /// first request only, follow-up URLs carry their own parameters.
    pub(crate) fn collect(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<Value>> {
        let mut out = Vec::new();
        let mut resp = self.get_page(&self.config.endpoint(path), query)?;

        loop {
            // the header has to come off before the body consumes the response
            let next = resp
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(pagination::next_url);

            let body = resp.text()?;
            debug!("response: {}", body);
            match serde_json::from_str(&body)? {
                Value::Array(records) => out.extend(records),
                _ => debug!("ignoring non-list body from {}", path),
            }

            match next {
                Some(url) => resp = self.get_page(&url, &[])?,
                None => break,
            }
        }

        Ok(out)
    }
}
