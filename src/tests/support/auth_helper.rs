use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

/// TokenProvider that skips cryptography and answers with fixed claims.
#[derive(Clone)]
pub struct StubTokenProvider {
    user_id: Option<String>,
    token_type: &'static str,
}

impl StubTokenProvider {
    pub fn access(user_id: &str) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            token_type: "access",
        }
    }

    pub fn refresh(user_id: &str) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            token_type: "refresh",
        }
    }

    pub fn rejecting() -> Self {
        Self {
            user_id: None,
            token_type: "access",
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let sub = self.user_id.clone().ok_or(TokenError::InvalidSignature)?;

        Ok(TokenClaims {
            sub,
            iss: "forum-api".to_string(),
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            token_type: self.token_type.to_string(),
        })
    }
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

/// Provider wrapped the way route handlers look it up in app data.
pub fn provider_data(
    provider: StubTokenProvider,
) -> actix_web::web::Data<std::sync::Arc<dyn TokenProvider + Send + Sync>> {
    let provider: std::sync::Arc<dyn TokenProvider + Send + Sync> = std::sync::Arc::new(provider);
    actix_web::web::Data::new(provider)
}

pub async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
    let body = actix_web::test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}
