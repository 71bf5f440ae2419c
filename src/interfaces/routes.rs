use actix_web::web;

use crate::constants::API_PREFIX;
use crate::handlers::system::{health_check, home};

mod auth;
mod employers;
mod evaluations;
mod json_error;
mod mentors;
mod placements;
mod reports;
mod students;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope(API_PREFIX)
            .configure(auth::config_routes)
            .configure(students::config_routes)
            .configure(employers::config_routes)
            .configure(mentors::config_routes)
            .configure(placements::config_routes)
            .configure(evaluations::config_routes)
            .configure(reports::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
