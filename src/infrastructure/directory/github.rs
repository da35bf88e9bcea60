use async_trait::async_trait;
use serde::Deserialize;

use crate::infrastructure::http_client::HttpClientTrait;
use crate::domain::{AuditError, DirectoryUser, IdentityDirectory};

const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = "governance-audit";
const MEMBERS_PER_PAGE: usize = 100;

/// GitHub-backed identity directory.
#[derive(Debug)]
pub struct GithubDirectory<C: HttpClientTrait> {
    client: C,
    base_url: String,
    auth_header: Option<String>,
}

impl<C: HttpClientTrait> GithubDirectory<C> {
    pub fn new(client: C, token: Option<String>) -> Self {
        Self::with_base_url(client, token, DEFAULT_GITHUB_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        token: Option<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            auth_header: token.map(|t| format!("Bearer {}", t)),
        }
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Accept".to_string(), GITHUB_ACCEPT.to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ];
        if let Some(ref auth) = self.auth_header {
            headers.push(("Authorization".to_string(), auth.clone()));
        }
        headers
    }

    fn user_url(&self, login: &str) -> String {
        format!("{}/users/{}", self.base_url, login)
    }

    fn members_url(&self, org: &str, page: usize) -> String {
        format!(
            "{}/orgs/{}/members?per_page={}&page={}",
            self.base_url, org, MEMBERS_PER_PAGE, page
        )
    }
}

#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
}

#[async_trait]
impl<C: HttpClientTrait> IdentityDirectory for GithubDirectory<C> {
    async fn lookup_user(&self, login: &str) -> Result<Option<DirectoryUser>, AuditError> {
        let Some(body) = self
            .client
            .get_json(&self.user_url(login), self.headers())
            .await?
        else {
            return Ok(None);
        };

        let user: GithubUser = serde_json::from_value(body)
            .map_err(|e| AuditError::directory(format!("Failed to parse user: {}", e)))?;

        Ok(Some(DirectoryUser { login: user.login }))
    }

    async fn list_org_members(&self, org: &str) -> Result<Vec<String>, AuditError> {
        let mut members = Vec::new();
        let mut page = 1;

        loop {
            let body = self
                .client
                .get_json(&self.members_url(org, page), self.headers())
                .await?
                .ok_or_else(|| {
                    AuditError::directory(format!("Organization '{}' not found", org))
                })?;

            let batch: Vec<GithubUser> = serde_json::from_value(body)
                .map_err(|e| AuditError::directory(format!("Failed to parse members: {}", e)))?;
            let batch_len = batch.len();
            members.extend(batch.into_iter().map(|u| u.login));

            if batch_len < MEMBERS_PER_PAGE {
                return Ok(members);
            }
            page += 1;
        }
    }
}
