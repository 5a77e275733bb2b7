//! Request header extractors.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};

/// Header identifying the calling user.
pub const USERNAME_HEADER: &str = "username";

/// Raw value of the `username` header.
///
/// Extraction never fails: a missing or non-UTF-8 header yields `None` and is
/// rejected later by the user lookup with "User not found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsernameHeader(Option<String>);

impl UsernameHeader {
    /// Borrow the header value, if present.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for UsernameHeader {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let value = req
            .headers()
            .get(USERNAME_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        ready(Ok(Self(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    #[actix_rt::test]
    async fn reads_header_value() {
        let req = TestRequest::default()
            .insert_header((USERNAME_HEADER, "ann"))
            .to_http_request();
        let header = UsernameHeader::extract(&req).await.expect("infallible");
        assert_eq!(header.as_deref(), Some("ann"));
    }

    #[rstest]
    #[actix_rt::test]
    async fn missing_header_is_none() {
        let req = TestRequest::default().to_http_request();
        let header = UsernameHeader::extract(&req).await.expect("infallible");
        assert_eq!(header, UsernameHeader::default());
    }
}
