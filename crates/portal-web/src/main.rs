#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use portal_types::Endpoints;
    use serde::Deserialize;

    pub const DEFAULT_USER_AGENT: &str = "portal-web/0.1";

    #[derive(Deserialize, Clone, Debug, Default, PartialEq)]
    pub struct Config {
        #[serde(default)]
        pub api: ApiConfig,
    }

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    #[serde(default)]
    pub struct ApiConfig {
        pub login_url: String,
        pub signup_url: String,
        pub user_agent: String,
    }

    impl Default for ApiConfig {
        fn default() -> Self {
            let endpoints = Endpoints::default();
            Self {
                login_url: endpoints.login_url,
                signup_url: endpoints.signup_url,
                user_agent: DEFAULT_USER_AGENT.into(),
            }
        }
    }

    impl ApiConfig {
        pub fn endpoints(&self) -> Endpoints {
            Endpoints {
                login_url: self.login_url.clone(),
                signup_url: self.signup_url.clone(),
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portal_client::AuthClient;
    use portal_ui::{shell, App};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: login={} signup={}",
        appConfig.api.login_url,
        appConfig.api.signup_url
    );

    let authClient = AuthClient::new(appConfig.api.endpoints(), &appConfig.api.user_agent)
        .unwrap_or_else(|e| panic!("failed to build auth client: {e}"));

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let addr = leptosOptions.site_addr;

    let routes = generate_route_list(App);

    // Server functions resolve the auth client from context.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let authClient = authClient.clone();
                move || {
                    leptos::prelude::provide_context(authClient.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
