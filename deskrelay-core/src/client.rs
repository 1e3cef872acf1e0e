use hyper::header;
use serde_json::Value;

use crate::{
    api::{req::TicketCreateRequest, resp::UserListResponse},
    auth::basic_auth_value,
    obj::Credentials,
};

/// authenticated client for the helpdesk vendor api
#[derive(Debug)]
pub struct HelpdeskClient {
    client: reqwest::Client,
    base_url: String,
}

impl HelpdeskClient {
    /// client scoped to the credential subdomain
    pub fn new(credentials: &Credentials) -> anyhow::Result<Self> {
        let base_url = format!("https://{}.zendesk.com/api/v2", credentials.sub_domain);
        Self::with_base_url(credentials, base_url)
    }

    /// same client against an explicit base url, used by tests
    pub fn with_base_url(credentials: &Credentials, base_url: String) -> anyhow::Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&basic_auth_value(credentials))?,
        );

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// one ticket-creation call; the raw response body goes back to the
    /// caller so it can be dumped for inspection
    pub async fn create_ticket(&self, req: &TicketCreateRequest) -> anyhow::Result<Value> {
        let resp = self
            .client
            .post(format!("{}/tickets.json", self.base_url))
            .json(req)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("create ticket failed with {}: {}", status, body);
        }

        Ok(resp.json().await?)
    }

    pub async fn list_users(&self) -> anyhow::Result<UserListResponse> {
        let resp = self
            .client
            .get(format!("{}/users.json", self.base_url))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("list users failed with {}: {}", status, body);
        }

        Ok(resp.json().await?)
    }
}
