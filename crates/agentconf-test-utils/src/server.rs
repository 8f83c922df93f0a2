//! In-process HTTP server serving canned config documents.

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

type Documents = Arc<HashMap<String, (StatusCode, String)>>;

/// HTTP server bound to an ephemeral localhost port; stops on drop.
pub struct ConfigServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl ConfigServer {
    /// Serve `(path, status, body)` entries; unknown paths answer 404.
    pub async fn start<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, u16, &'static str)>,
    {
        let documents: Documents = Arc::new(
            documents
                .into_iter()
                .map(|(path, status, body)| {
                    let status = StatusCode::from_u16(status).expect("status");
                    (path.to_string(), (status, body.to_string()))
                })
                .collect(),
        );
        let app = Router::new()
            .fallback(serve_document)
            .with_state(documents);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        Self { addr, handle }
    }

    /// `http://127.0.0.1:<port>` without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Full http location for a path such as `/agent.yaml`.
    pub fn location(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }
}

impl Drop for ConfigServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_document(State(documents): State<Documents>, uri: Uri) -> Response {
    match documents.get(uri.path()) {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
