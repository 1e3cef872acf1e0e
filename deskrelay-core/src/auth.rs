use base64::prelude::{Engine as _, BASE64_STANDARD};

use crate::obj::Credentials;

/// basic auth value with the vendor token convention:
/// user is "{apiUser}/token", password is the api token
pub fn basic_auth_value(credentials: &Credentials) -> String {
    let pair = format!(
        "{}/token:{}",
        credentials.api_user, credentials.api_token
    );
    format!("Basic {}", BASE64_STANDARD.encode(pair))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            api_user: "agent@example.com".to_string(),
            api_token: "secret".to_string(),
            sub_domain: "example".to_string(),
        }
    }

    #[test]
    fn test_basic_auth_value() {
        let value = basic_auth_value(&credentials());
        assert_eq!(value, "Basic YWdlbnRAZXhhbXBsZS5jb20vdG9rZW46c2VjcmV0");
    }

    #[test]
    fn test_basic_auth_value_round_trip() {
        let value = basic_auth_value(&credentials());
        let encoded = value.strip_prefix("Basic ").unwrap();
        let decoded = BASE64_STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"agent@example.com/token:secret");
    }
}
