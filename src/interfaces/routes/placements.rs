use actix_web::web;

use crate::handlers::placements;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/placements")
            .service(
                web::resource("")
                    .route(web::post().to(placements::create_placement))
                    .route(web::get().to(placements::list_placements))
            )
            .service(
                web::resource("/{placement_id}")
                    .route(web::get().to(placements::get_placement))
                    .route(web::patch().to(placements::update_placement))
                    .route(web::delete().to(placements::delete_placement))
            )
            .service(
                web::resource("/{placement_id}/evaluations")
                    .route(web::get().to(placements::get_placement_evaluations))
            )
    );
}
