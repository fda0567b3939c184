mod broadcast_newsletter;
mod subscribe_newsletter;
mod unsubscribe_newsletter;

use actix_web::web;
use broadcast_newsletter::broadcast_newsletter_controller;
use subscribe_newsletter::subscribe_newsletter_controller;
use unsubscribe_newsletter::unsubscribe_newsletter_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/newsletter/subscribe",
        web::post().to(subscribe_newsletter_controller),
    );
    cfg.route(
        "/newsletter/unsubscribe",
        web::post().to(unsubscribe_newsletter_controller),
    );
    cfg.route(
        "/newsletter/broadcast",
        web::post().to(broadcast_newsletter_controller),
    );
}
