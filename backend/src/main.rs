mod config;
mod services;

use crate::config::Config;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    info!("DriveMatch client running at {}", url);
    info!("Using DriveMatch API at {}", config.api_endpoint);

    let app_config = web::Data::new(config.app_config());

    HttpServer::new(move || {
        App::new()
            .app_data(app_config.clone())
            .service(services::app_config::configure_routes())
            .default_service(web::route().to(services::static_files::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
