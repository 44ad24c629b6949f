use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use cadenza_core::SessionId;

/// Cookie carrying the session id
const SESSION_COOKIE: &str = "cadenza_session";

/// Middleware that resolves the request's session identity
///
/// Reads the session cookie, minting a fresh id when the cookie is
/// missing or unparsable. The id is stored in request extensions for
/// downstream handlers; a newly minted id is also set on the response.
pub async fn session_middleware(request: Request, next: Next) -> Response {
    let existing = cookie_session(&request);
    let session = existing.unwrap_or_else(SessionId::generate);

    let mut request = request;
    request.extensions_mut().insert(session);

    let mut response = next.run(request).await;

    if existing.is_none() {
        let cookie = format!("{SESSION_COOKIE}={session}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = http::HeaderValue::from_str(&cookie) {
            response.headers_mut().append(http::header::SET_COOKIE, value);
        }
    }

    response
}

/// Extract the session id from the request's cookie header
fn cookie_session(request: &Request) -> Option<SessionId> {
    let header = request.headers().get(http::header::COOKIE)?.to_str().ok()?;

    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE { SessionId::parse(value) } else { None }
    })
}
