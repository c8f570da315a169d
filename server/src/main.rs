use server::config::Config;
use server::data::state::HttpState;
use server::error::StartupError;
use server::repo::http;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use log::{error, info};

#[actix_web::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::load()?;
    let server_address = config.server_address();

    match config.telemetry.seed {
        Some(seed) => info!("Serving deterministic telemetry from seed {}", seed),
        None => info!("Serving random telemetry"),
    }

    let state = Data::new(HttpState::new(&config.telemetry));

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(http::cors::policy())
            .configure(http::configure)
    });

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    let server = server.bind(&server_address)?;

    info!("Listening on {}", server_address);
    info!("  - GET /telemetry");

    server.run().await?;

    Ok(())
}
