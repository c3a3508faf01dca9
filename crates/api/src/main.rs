#[tokio::main]
async fn main() {
    lowstock_observability::init();

    let config = lowstock_api::config::ApiConfig::from_env();
    let catalog =
        lowstock_catalog::Catalog::builtin().expect("built-in catalog has colliding item names");

    let listen_addr = config.listen_addr.clone();
    let app = lowstock_api::app::build_app(config, catalog).expect("failed to build webhook client");

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
