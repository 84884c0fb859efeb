use std::sync::Arc;

use axum::{Extension, extract::RawQuery, response::Html};
use tokio::sync::Mutex;

use crate::{fragment, types::AuthSession, warning};

/// Receives the relayed redirect fragment and stores the token.
///
/// The relay page forwards the fragment verbatim as the query string, so the
/// raw query is parsed with the fragment extractor: any field ordering and
/// unknown fields are tolerated. Delivery is rejected when no flow is in
/// progress or when the `state` nonce does not match the one sent on the
/// authorize URL. A fragment without an access token (e.g. the user denied
/// consent) is reported but not treated as a server error.
pub async fn collect(
    RawQuery(raw): RawQuery,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthSession>>>>,
) -> Html<&'static str> {
    let raw = raw.unwrap_or_default();
    let fields = fragment::extract(&raw);

    let mut lock = shared_state.lock().await;
    let Some(ref mut session) = lock.as_mut() else {
        return Html("<h4>No authentication in progress.</h4>");
    };

    match fields.get("state").and_then(|v| v.as_deref()) {
        Some(got) if got == session.state => {}
        _ => {
            warning!("Rejected token delivery with wrong or missing state nonce.");
            return Html("<h4>State mismatch. Please retry the login.</h4>");
        }
    }

    match fragment::token_from_fragment(&raw) {
        Some(token) => {
            session.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        None => {
            warning!("Redirect fragment carried no access token.");
            Html("<h4>Login failed or was denied.</h4>")
        }
    }
}
