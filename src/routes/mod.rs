// Route exports
pub mod ai;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(ai::configure);
}
