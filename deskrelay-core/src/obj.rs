use serde::{Deserialize, Serialize};

/// api identity for the helpdesk vendor, as read from credentials.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// agent login, usually an email address
    pub api_user: String,
    /// api token issued by the vendor
    pub api_token: String,
    /// vendor account subdomain, scopes the base url
    pub sub_domain: String,
}
