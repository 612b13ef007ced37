use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::api::GlossaryApi;
use super::error::{GlossaryError, glossary_error, translation_error};
use super::types::{DeleteOutcome, GlossaryRecord, GlossarySpec, TranslateRequest};
use crate::terms::{self, TermSet};

pub const FREE_ENDPOINT: &str = "https://api-free.deepl.com";
pub const PRO_ENDPOINT: &str = "https://api.deepl.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Picks the API host for a key: Free-tier keys end with `:fx`.
pub fn default_endpoint_for_key(api_key: &str) -> &'static str {
    if api_key.ends_with(":fx") {
        FREE_ENDPOINT
    } else {
        PRO_ENDPOINT
    }
}

/// Everything needed to talk to DeepL.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct CreateGlossaryBody<'a> {
    name: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
    entries: &'a str,
    entries_format: &'static str,
}

#[derive(Debug, Deserialize)]
struct ListGlossariesResponse {
    #[serde(default)]
    glossaries: Vec<GlossaryRecord>,
}

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    text: [&'a str; 1],
    source_lang: String,
    target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    glossary_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

/// HTTP client for DeepL's glossary and translate endpoints.
///
/// Stateless between calls; each method is one request/response.
pub struct GlossaryClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GlossaryClient {
    pub fn new(config: &ClientConfig) -> Result<Self, GlossaryError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.endpoint);
        tracing::debug!(method = method.as_str(), url = url.as_str(), "DeepL request");

        self.client
            .request(method, url)
            .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", self.api_key))
    }

    async fn send(request: RequestBuilder) -> Result<Response, GlossaryError> {
        let response = request.send().await?;
        tracing::debug!(status = %response.status(), "DeepL response");
        Ok(response)
    }
}

fn glossary_path(id: &str) -> String {
    format!("/v2/glossaries/{id}")
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GlossaryError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| GlossaryError::InvalidResponse(e.to_string()))
}

/// Extracts DeepL's `message`/`detail` from an error body, falling back to the raw text.
async fn error_parts(response: Response) -> (u16, String) {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    (status.as_u16(), error_message(status, &body))
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorBody { message, detail }) = serde_json::from_str::<ErrorBody>(body) {
        match (message, detail) {
            (Some(m), Some(d)) if !d.is_empty() => return format!("{m}: {d}"),
            (Some(m), _) => return m,
            (None, Some(d)) => return d,
            (None, None) => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("no response body").to_string()
    } else {
        trimmed.to_string()
    }
}

impl GlossaryApi for GlossaryClient {
    async fn create(
        &self,
        spec: &GlossarySpec,
        terms: &TermSet,
    ) -> Result<GlossaryRecord, GlossaryError> {
        if terms.is_empty() {
            return Err(GlossaryError::Validation {
                message: "a glossary needs at least one entry".to_string(),
            });
        }
        let entries = terms::serialize(terms)?;

        let body = CreateGlossaryBody {
            name: &spec.name,
            source_lang: &spec.source_lang,
            target_lang: &spec.target_lang,
            entries: &entries,
            entries_format: "tsv",
        };

        let response = Self::send(self.request(Method::POST, "/v2/glossaries").json(&body)).await?;
        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(glossary_error(status, message, None));
        }

        read_json(response).await
    }

    async fn list(&self) -> Result<Vec<GlossaryRecord>, GlossaryError> {
        let response = Self::send(self.request(Method::GET, "/v2/glossaries")).await?;
        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(glossary_error(status, message, None));
        }

        let list: ListGlossariesResponse = read_json(response).await?;
        Ok(list.glossaries)
    }

    async fn get(&self, id: &str) -> Result<GlossaryRecord, GlossaryError> {
        let response = Self::send(self.request(Method::GET, &glossary_path(id))).await?;
        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(glossary_error(status, message, Some(id)));
        }

        read_json(response).await
    }

    async fn get_entries(&self, id: &str) -> Result<TermSet, GlossaryError> {
        let path = format!("{}/entries", glossary_path(id));
        let request = self
            .request(Method::GET, &path)
            .header(ACCEPT, "text/tab-separated-values");

        let response = Self::send(request).await?;
        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(glossary_error(status, message, Some(id)));
        }

        let body = response.text().await?;
        Ok(terms::deserialize(&body))
    }

    async fn delete(&self, id: &str) -> Result<DeleteOutcome, GlossaryError> {
        let response = Self::send(self.request(Method::DELETE, &glossary_path(id))).await?;

        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(DeleteOutcome::Deleted),
            StatusCode::NOT_FOUND => Ok(DeleteOutcome::AlreadyGone),
            _ => {
                let (status, message) = error_parts(response).await;
                Err(glossary_error(status, message, Some(id)))
            }
        }
    }

    async fn translate(&self, request: &TranslateRequest<'_>) -> Result<String, GlossaryError> {
        let body = TranslateBody {
            text: [request.text],
            source_lang: request.source_lang.to_uppercase(),
            target_lang: request.target_lang.to_uppercase(),
            glossary_id: request.glossary_id,
        };

        let response = Self::send(self.request(Method::POST, "/v2/translate").json(&body)).await?;
        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(translation_error(status, message));
        }

        let parsed: TranslateResponse = read_json(response).await?;
        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| GlossaryError::InvalidResponse("no translations returned".to_string()))
    }
}
