use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use diabetes_risk::config::Settings;
use diabetes_risk::core::RiskAssessor;
use diabetes_risk::routes::{self, errors, AppState};
use diabetes_risk::services::{NotesServiceClient, PatientServiceClient};
use std::io;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match log_format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    init_logging();

    info!("Starting diabetes risk assessment service...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    let patients = PatientServiceClient::new(settings.patient_endpoint()).map_err(|e| {
        error!("Failed to create patient service client: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    let notes = NotesServiceClient::new(settings.notes_endpoint()).map_err(|e| {
        error!("Failed to create notes service client: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    info!(
        "Upstream clients initialized (patients: {}, notes: {}, auth: {})",
        settings.patient_service.url,
        settings.notes_service.url,
        settings.auth.is_some()
    );

    let app_state = AppState {
        assessor: RiskAssessor::new(Arc::new(patients), Arc::new(notes)),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(errors::json_config())
            .app_data(errors::path_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
