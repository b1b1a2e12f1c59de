//! Session key extractor.
//!
//! Reads the session id from the request cookie, minting a fresh one when
//! the cookie is absent. Handlers attach the cookie to the response for
//! fresh sessions via [`SessionKey::issue_cookie`].

use std::future::{ready, Ready};

use actix_web::cookie::Cookie;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::utils::session_id::generate_session_id;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "pendu_session";

#[derive(Debug, Clone)]
pub struct SessionKey {
    pub id: String,
    /// True when the id was minted for this request rather than read from
    /// the cookie.
    pub fresh: bool,
}

impl SessionKey {
    /// The cookie to attach to the response, for freshly minted sessions.
    pub fn issue_cookie(&self) -> Option<Cookie<'static>> {
        self.fresh.then(|| {
            Cookie::build(SESSION_COOKIE, self.id.clone())
                .path("/")
                .http_only(true)
                .finish()
        })
    }
}

impl FromRequest for SessionKey {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let key = match req.cookie(SESSION_COOKIE) {
            Some(cookie) => SessionKey {
                id: cookie.value().to_string(),
                fresh: false,
            },
            None => SessionKey {
                id: generate_session_id(),
                fresh: true,
            },
        };
        ready(Ok(key))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;
    use actix_web::FromRequest;

    use super::{SessionKey, SESSION_COOKIE};

    #[actix_web::test]
    async fn existing_cookie_is_reused() {
        let req = TestRequest::default()
            .cookie(actix_web::cookie::Cookie::new(SESSION_COOKIE, "ABC123"))
            .to_http_request();
        let key = SessionKey::extract(&req).await.unwrap();
        assert_eq!(key.id, "ABC123");
        assert!(!key.fresh);
        assert!(key.issue_cookie().is_none());
    }

    #[actix_web::test]
    async fn missing_cookie_mints_a_fresh_key() {
        let req = TestRequest::default().to_http_request();
        let key = SessionKey::extract(&req).await.unwrap();
        assert!(key.fresh);
        assert!(!key.id.is_empty());

        let cookie = key.issue_cookie().expect("fresh keys issue a cookie");
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), key.id);
    }
}
