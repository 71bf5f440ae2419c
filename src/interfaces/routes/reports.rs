use actix_web::web;

use crate::handlers::reports;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .service(
                web::resource("/placements-per-employer")
                    .route(web::get().to(reports::placements_per_employer))
            )
    );
}
