use actix_files::Files;
use actix_web::middleware::Compress;
use actix_web::{web, App, HttpServer};

pub mod config;
pub mod quote;
pub mod site;
pub mod state;

pub use crate::config::AppConfig;
pub use crate::state::AppState;

/// Register every route of the site on the given service config.
///
/// Shared between `run` and the integration tests so both drive the same
/// routing table.
pub fn configure_app(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    let static_dir = state.config.static_dir.clone();
    cfg.app_data(state)
        .service(web::resource("/").route(web::get().to(site::handlers::home)))
        .service(web::resource("/contact").route(web::get().to(site::handlers::contact)))
        .service(
            web::resource("/pricing")
                .route(web::get().to(site::handlers::pricing))
                .route(web::post().to(quote::handlers::submit_quote)),
        )
        .service(Files::new("/static", static_dir))
        .default_service(web::route().to(site::handlers::not_found));
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration. Please check your environment or .env file. Error: {e:#}");
            std::process::exit(1);
        }
    };

    // The generator script writes its output here; make sure it exists so
    // /static can serve from it.
    if let Err(e) = std::fs::create_dir_all(&config.static_dir) {
        log::error!(
            "Failed to create static directory {}: {e}",
            config.static_dir.display()
        );
        std::process::exit(1);
    }

    let bind_addr = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Compress::default())
            .configure(move |cfg| configure_app(cfg, state))
    })
    .bind(bind_addr)?
    .run()
    .await
}
