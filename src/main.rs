use std::str::FromStr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, get_service, post},
    Router,
};
use dotenvy::dotenv;
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use friender::config::Config;
use friender::web::middleware::auth as auth_middleware;
use friender::web::routes::{auth, home, judgement, photos, user};
use friender::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Configuration + database
    let config = Config::from_env().expect("DATABASE_URL must be set (see .env)");
    println!("Connecting to database: {}", config.database_url);

    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("DATABASE_URL is not a valid sqlite URL")
        .create_if_missing(true)
        // Edge tables cascade on user deletion; SQLite needs this per connection.
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await
        .expect("Cannot connect to the database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Database migration failed");

    let http = reqwest::Client::builder()
        .timeout(config.upload_timeout)
        .build()
        .expect("Cannot build HTTP client");

    let state = AppState {
        pool,
        config: Arc::new(config),
        http,
    };

    // 3. Protected routes under one middleware layer
    let protected_routes = Router::new()
        .route("/user/:id", get(user::user_profile_handler))
        .route("/user/:id/friends", get(user::user_friends_handler))
        .route("/pending/:liked_user_id", post(judgement::like_handler))
        .route(
            "/disliking/:disliked_user_id",
            post(judgement::dislike_handler),
        )
        .route(
            "/profilephoto/:user_id",
            get(photos::photo_upload_page).post(photos::photo_upload_handler),
        )
        .route("/logout", post(auth::logout_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::require_auth,
        ));

    // 4. Build the whole application
    let app = Router::new()
        // Public routes
        .route("/", get(home::home_handler))
        .route("/signup", get(auth::signup_page).post(auth::signup_handler))
        .route("/login", get(auth::login_page).post(auth::login_handler))
        // Protected routes
        .merge(protected_routes)
        // Static files
        .nest_service(
            "/assets",
            get_service(ServeDir::new("assets")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        // State
        .with_state(state.clone());

    // 5. Start the server (with fallback port)
    let host = state.config.host.clone();
    let port = state.config.port;
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Cannot parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Could not bind on {}: {}. Trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("Cannot parse fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Cannot bind on fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🚀 Server running on http://{}", bound_addr);
    println!("📍 Go to http://{}/signup to get started", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
