use actix_web::web;

use crate::handlers::evaluations;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/evaluations")
            .service(
                web::resource("")
                    .route(web::post().to(evaluations::create_evaluation))
                    .route(web::get().to(evaluations::list_evaluations))
            )
            .service(
                web::resource("/{evaluation_id}")
                    .route(web::get().to(evaluations::get_evaluation))
                    .route(web::patch().to(evaluations::update_evaluation))
                    .route(web::delete().to(evaluations::delete_evaluation))
            )
    );
}
