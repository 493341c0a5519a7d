use std::{
    future::Future,
    time::Duration,
};

use reqwest::{
    header::{
        ACCEPT,
        USER_AGENT,
    },
    Client,
    Response,
};
use serde::Deserialize;

use crate::core::JokeboxError;

pub const DEFAULT_ENDPOINT: &str = "https://icanhazdadjoke.com/";

const USER_AGENT_VALUE: &str = "jokebox/0.1 (+reqwest)";

/// One joke as the remote API serves it. The endpoint also sends a `status`
/// field, which we ignore in favor of the HTTP status line.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceJoke {
    pub id: String,
    pub joke: String,
}

/// Anything that can produce a single random joke per request.
pub trait JokeSource {
    fn fetch_one(&self) -> impl Future<Output = Result<SourceJoke, JokeboxError>> + Send;
}

#[derive(Clone)]
pub struct DadJokeClient {
    client: Client,
    endpoint: String,
}

impl DadJokeClient {
    pub fn new() -> Result<Self, JokeboxError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, JokeboxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| JokeboxError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, endpoint: endpoint.into() })
    }

    /// Cheap reachability probe backing the status indicator in the top bar.
    pub async fn ping(&self) -> Result<(), JokeboxError> {
        let resp =
            self.client.head(&self.endpoint).header(USER_AGENT, USER_AGENT_VALUE).send().await?;

        ensure_success(&resp)
    }
}

impl JokeSource for DadJokeClient {
    async fn fetch_one(&self) -> Result<SourceJoke, JokeboxError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .await?;

        ensure_success(&resp)?;

        let joke: SourceJoke = resp.json().await?;
        Ok(joke)
    }
}

fn ensure_success(resp: &Response) -> Result<(), JokeboxError> {
    if !resp.status().is_success() {
        return Err(JokeboxError::Http {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::SourceJoke;

    #[test]
    fn decodes_a_source_response() {
        let json = r#"{"id":"R7UfaahVfFd","joke":"My dog used to chase people on a bike a lot. It got so bad I had to take his bike away.","status":200}"#;

        let joke: SourceJoke = serde_json::from_str(json).unwrap();

        assert_eq!(joke.id, "R7UfaahVfFd");
        assert!(joke.joke.starts_with("My dog"));
    }

    #[test]
    fn rejects_a_response_without_an_id() {
        let json = r#"{"joke":"no id here","status":200}"#;

        assert!(serde_json::from_str::<SourceJoke>(json).is_err());
    }
}
