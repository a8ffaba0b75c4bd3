//! Blocking client for the Anthropic Messages API.
//!
//! One synchronous POST per invocation, no retries, no caller-side timeout.
//! The credential is read from the environment and validated before any
//! other work happens, so a misconfigured run fails without side effects.

use crate::error::{Result, StoresmithError};
use serde::{Deserialize, Serialize};

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Messages endpoint.
const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";

/// Model used for all generation.
const MODEL: &str = "claude-sonnet-4-20250514";

/// API version header value.
const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Text-generation client bound to the credential from the environment.
#[derive(Debug)]
pub struct TextGenClient {
    api_key: String,
    http: reqwest::blocking::Client,
}

impl TextGenClient {
    /// Build a client from [`API_KEY_VAR`].
    ///
    /// A missing or empty credential is a user error; constructing the
    /// client is the precondition check the generate commands run first.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                StoresmithError::UserError(format!(
                    "{} environment variable not set",
                    API_KEY_VAR
                ))
            })?;

        Ok(Self {
            api_key,
            http: reqwest::blocking::Client::new(),
        })
    }

    /// Issue one completion request and return the generated text.
    pub fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .map_err(|e| StoresmithError::ApiError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(StoresmithError::ApiError(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .map_err(|e| StoresmithError::ApiError(format!("unreadable response: {}", e)))?;

        parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| StoresmithError::ApiError("response had no content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn from_env_fails_without_credential() {
        // SAFETY: guarded by #[serial]; no other thread reads the
        // environment while these tests run.
        unsafe { std::env::remove_var(API_KEY_VAR) };

        let result = TextGenClient::from_env();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, StoresmithError::UserError(_)));
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    #[serial]
    fn from_env_rejects_empty_credential() {
        unsafe { std::env::set_var(API_KEY_VAR, "") };

        assert!(TextGenClient::from_env().is_err());

        unsafe { std::env::remove_var(API_KEY_VAR) };
    }

    #[test]
    #[serial]
    fn from_env_accepts_credential() {
        unsafe { std::env::set_var(API_KEY_VAR, "sk-test") };

        assert!(TextGenClient::from_env().is_ok());

        unsafe { std::env::remove_var(API_KEY_VAR) };
    }

    #[test]
    fn request_body_shape() {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: 1000,
            messages: vec![Message {
                role: "user",
                content: "write a description",
            }],
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], MODEL);
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "write a description");
    }

    #[test]
    fn response_parsing_takes_first_block() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content": [{"type": "text", "text": "Release notes"}], "role": "assistant"}"#,
        )
        .unwrap();
        assert_eq!(parsed.content[0].text, "Release notes");
    }
}
