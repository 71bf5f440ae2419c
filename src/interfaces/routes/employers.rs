use actix_web::web;

use crate::handlers::employers;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employers")
            .service(
                web::resource("")
                    .route(web::post().to(employers::create_employer))
                    .route(web::get().to(employers::list_employers))
            )
            .service(
                web::resource("/{employer_id}")
                    .route(web::get().to(employers::get_employer))
                    .route(web::patch().to(employers::update_employer))
                    .route(web::delete().to(employers::delete_employer))
            )
    );
}
