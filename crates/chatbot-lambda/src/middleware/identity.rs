use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use lambda_http::request::RequestContext;
use serde_json::Value;
use tracing::info;

/// Log the identity the gateway authorizer attached, when present.
///
/// The Cognito authorizer runs in front of this function in the deployed
/// stack; nothing is enforced here. Missing context (direct invocations,
/// local tests) is not an error.
pub async fn log_identity(req: Request, next: Next) -> Response {
    if let Some(ctx) = req.extensions().get::<RequestContext>() {
        if let Some(user) = serde_json::to_value(ctx)
            .ok()
            .as_ref()
            .and_then(authenticated_user)
        {
            info!(user = %user, "authenticated user");
        }
    }

    next.run(req).await
}

/// Pull `email` or `cognito:username` out of the authorizer claims.
///
/// The claims sit at `authorizer.claims` behind a REST API Cognito
/// authorizer and at `authorizer.jwt.claims` behind an HTTP API JWT
/// authorizer, so the context is navigated loosely rather than matched
/// against one concrete event type.
pub fn authenticated_user(context: &Value) -> Option<String> {
    let authorizer = context.get("authorizer")?;
    let claims = authorizer
        .get("claims")
        .or_else(|| authorizer.get("jwt").and_then(|jwt| jwt.get("claims")))?;

    claims
        .get("email")
        .or_else(|| claims.get("cognito:username"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
