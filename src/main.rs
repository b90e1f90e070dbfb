mod configuration;
mod controllers;
mod data;

use std::future::Future;
use std::net::TcpListener;
use std::path::Path;
use axum::Router;
use eyre::WrapErr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use crate::configuration::Configuration;

fn application() -> Router {
    controllers::routes()
        .layer(TraceLayer::new_for_http())
}

async fn serve<F>(listener: TcpListener, shutdown: F) -> eyre::Result<()>
where
    F: Future<Output = ()>,
{
    axum::Server::from_tcp(listener)?
        .serve(application().into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Unable to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => { stream.recv().await; },
            Err(e) => {
                tracing::error!("Unable to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Loading configuration");
    let configuration = Configuration::load(Path::new("configuration.toml"))
        .await
        .wrap_err("Unable to load configuration.toml")?;

    let addr = configuration.socket_address();
    let listener = TcpListener::bind(addr)
        .wrap_err_with(|| format!("Unable to bind {}", addr))?;

    tracing::info!("App running on port {}", configuration.port);
    serve(listener, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use tokio::sync::oneshot;

    use super::serve;

    #[tokio::test]
    async fn serves_routes_over_tcp_right_after_bind() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        let server = tokio::spawn(serve(listener, async move {
            let _ = stopped.await;
        }));

        let client = reqwest::Client::new();

        let root = client.get(format!("http://{}/", addr)).send().await.unwrap();
        assert_eq!(root.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = root.json().await.unwrap();
        assert_eq!(json, serde_json::json!({ "service": "demo-app", "status": "running" }));

        let health = client.get(format!("http://{}/health", addr)).send().await.unwrap();
        assert_eq!(health.status(), reqwest::StatusCode::OK);
        assert_eq!(health.text().await.unwrap(), "OK");

        let missing = client.get(format!("http://{}/foo", addr)).send().await.unwrap();
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

        drop(client);
        stop.send(()).unwrap();
        server.await.unwrap().unwrap();
    }
}
