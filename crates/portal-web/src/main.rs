#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use portal_web::app::{App, shell};
    use portal_web::config::CONFIG;
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    portal_web::logging::init();

    let conf = get_configuration(None).context("Failed to load Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let site_root = leptos_options.site_root.clone();
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!(%addr, endpoint = CONFIG.api.endpoint, "listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client entry point is `hydrate` in lib.rs
}
