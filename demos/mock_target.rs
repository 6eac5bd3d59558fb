//! A local target to point the load generator at.
//!
//! `/` always answers 200, `/flaky` answers 500 on every third request and
//! `/missing` answers 404.
//!
//! ```text
//! cargo run --example mock_target
//! cargo run -- -u http://127.0.0.1:8081/flaky -n 300 -c 20
//! ```

use axum::{http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let hits = Arc::new(AtomicU64::new(0));

    let app = Router::new()
        .route("/", get(|| async { "Hello from the mock target" }))
        .route(
            "/flaky",
            get(move || {
                let hits = hits.clone();
                async move {
                    if hits.fetch_add(1, Ordering::Relaxed) % 3 == 2 {
                        (StatusCode::INTERNAL_SERVER_ERROR, "try again")
                    } else {
                        (StatusCode::OK, "ok")
                    }
                }
            }),
        )
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "nothing here") }));

    let addr = SocketAddr::from(([127, 0, 0, 1], 8081));
    println!("Mock target listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
