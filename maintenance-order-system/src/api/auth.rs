use std::future::{ready, Ready};
use std::str::FromStr;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use domain_work_order::model::vo::{Actor, Role};
use uuid::Uuid;

use crate::api::AppError;

/// Caller identity resolved from the gateway-injected `X-User-Id` and
/// `X-User-Role` headers. The gateway terminates credentials; this service
/// only trusts its verdict.
pub struct Identity(pub Actor);

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(identity_from_headers(req))
    }
}

fn identity_from_headers(req: &HttpRequest) -> Result<Identity, AppError> {
    let id = header(req, "x-user-id")
        .and_then(|v| Uuid::from_str(v).ok())
        .ok_or(AppError::Unauthorized)?;
    let role = match header(req, "x-user-role").map(str::to_lowercase).as_deref() {
        Some("user") => Role::User,
        Some("admin") => Role::Admin,
        Some("superadmin") => Role::SuperAdmin,
        _ => return Err(AppError::Unauthorized),
    };
    Ok(Identity(Actor { id, role }))
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn resolves_actor_from_headers() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header(("X-User-Id", id.to_string()))
            .insert_header(("X-User-Role", "SuperAdmin"))
            .to_http_request();
        let identity = identity_from_headers(&req).unwrap();
        assert_eq!(identity.0.id, id);
        assert_eq!(identity.0.role, Role::SuperAdmin);
    }

    #[test]
    fn missing_or_unknown_headers_are_unauthorized() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(identity_from_headers(&req), Err(AppError::Unauthorized)));

        let req = TestRequest::default()
            .insert_header(("X-User-Id", Uuid::new_v4().to_string()))
            .insert_header(("X-User-Role", "auditor"))
            .to_http_request();
        assert!(matches!(identity_from_headers(&req), Err(AppError::Unauthorized)));
    }
}
