use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::{error, info, warn};

/// Log status, method and URI of every request once it is answered
///
/// Client errors log at warn and server errors at error.
pub async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();
    if status.is_server_error() {
        error!("{} {} {}", status.as_u16(), method, uri);
    } else if status.is_client_error() {
        warn!("{} {} {}", status.as_u16(), method, uri);
    } else {
        info!("{} {} {}", status.as_u16(), method, uri);
    }
    response
}
