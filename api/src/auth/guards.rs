use crate::auth::claims::AuthUser;
use crate::response::ApiError;
use axum::{
    body::Body,
    extract::FromRequestParts,
    http::Request,
    middleware::Next,
    response::Response,
};
use db::models::user::Role;

/// Helper to extract, validate user from request extensions and insert the back into the request
async fn extract_and_insert_authuser(req: Request<Body>) -> Result<(Request<Body>, AuthUser), ApiError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|(_, msg)| ApiError::unauthorized(msg))?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

/// Publishers and admins only.
pub async fn allow_publisher(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if !matches!(user.0.role, Role::Publisher | Role::Admin) {
        return Err(ApiError::forbidden(format!(
            "User role {} is not authorized to access this route",
            user.0.role
        )));
    }

    Ok(next.run(req).await)
}
