// Route exports
pub mod assessments;
pub mod errors;

use actix_web::web;

pub use assessments::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(assessments::configure),
    );
}
