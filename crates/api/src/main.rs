#[tokio::main]
async fn main() {
    userd_observability::init();

    let store = userd_api::app::services::build_store().await;
    let app = userd_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000")
        .await
        .expect("failed to bind 0.0.0.0:8000");

    tracing::info!("JSON API server listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
