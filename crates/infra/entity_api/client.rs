use anyhow::Result;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;
use url::Url;

/// Minimal client for the remote entity store built on reqwest. Every entity
/// type is exposed through the same uniform CRUD surface.
pub struct EntityApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl EntityApiClient {
    pub fn new(base_url: Url, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn entity_url(&self, entity: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("entities/{entity}"))?)
    }

    fn record_url(&self, entity: &str, id: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("entities/{entity}/{id}"))?)
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        error!(
            status = %status,
            response_body = %body,
            context = %context,
            "entity api request failed"
        );

        anyhow::bail!("Entity API request failed: {} (status {})", context, status);
    }

    pub async fn list<T: DeserializeOwned>(
        &self,
        entity: &str,
        sort: Option<&str>,
    ) -> Result<Vec<T>> {
        let mut url = self.entity_url(entity)?;
        if let Some(sort) = sort {
            url.query_pairs_mut().append_pair("sort", sort);
        }

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, &format!("list {entity}")).await?;

        Ok(resp.json().await?)
    }

    pub async fn filter<T: DeserializeOwned>(
        &self,
        entity: &str,
        criteria: &serde_json::Value,
        sort: Option<&str>,
    ) -> Result<Vec<T>> {
        let mut url = self.base_url.join(&format!("entities/{entity}/filter"))?;
        if let Some(sort) = sort {
            url.query_pairs_mut().append_pair("sort", sort);
        }

        let resp = self
            .http
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(criteria)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, &format!("filter {entity}")).await?;

        Ok(resp.json().await?)
    }

    pub async fn get<T: DeserializeOwned>(&self, entity: &str, id: &str) -> Result<Option<T>> {
        let resp = self
            .http
            .get(self.record_url(entity, id)?)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = Self::ensure_success(resp, &format!("get {entity}")).await?;

        Ok(Some(resp.json().await?))
    }

    pub async fn create<T: DeserializeOwned, P: Serialize + Sync>(
        &self,
        entity: &str,
        payload: &P,
    ) -> Result<T> {
        let resp = self
            .http
            .post(self.entity_url(entity)?)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, &format!("create {entity}")).await?;

        Ok(resp.json().await?)
    }

    pub async fn update(&self, entity: &str, id: &str, patch: &serde_json::Value) -> Result<()> {
        let resp = self
            .http
            .patch(self.record_url(entity, id)?)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(patch)
            .send()
            .await?;
        Self::ensure_success(resp, &format!("update {entity}")).await?;

        Ok(())
    }

    pub async fn delete(&self, entity: &str, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(self.record_url(entity, id)?)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;
        Self::ensure_success(resp, &format!("delete {entity}")).await?;

        Ok(())
    }
}
