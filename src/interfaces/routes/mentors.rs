use actix_web::web;

use crate::handlers::mentors;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/mentors")
            .service(
                web::resource("")
                    .route(web::post().to(mentors::create_mentor))
                    .route(web::get().to(mentors::list_mentors))
            )
            .service(
                web::resource("/{mentor_id}")
                    .route(web::get().to(mentors::get_mentor))
                    .route(web::patch().to(mentors::update_mentor))
                    .route(web::delete().to(mentors::delete_mentor))
            )
    );
}
