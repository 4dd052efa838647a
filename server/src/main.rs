mod genai;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "client/dist".into());

    let genai = genai::client_from_env();
    let state = state::AppState::new(genai);

    let app = routes::app(state, &static_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %static_dir, "posepad listening");
    axum::serve(listener, app).await.expect("server failed");
}
