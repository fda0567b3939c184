mod auto_close_conversations;
mod close_conversation;
mod get_conversations;

use actix_web::web;
use auto_close_conversations::auto_close_conversations_controller;
use close_conversation::close_conversation_controller;
use get_conversations::get_conversations_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/conversations", web::get().to(get_conversations_controller));
    cfg.route(
        "/conversations/auto-close",
        web::get().to(auto_close_conversations_controller),
    );
    cfg.route(
        "/conversations/{conversation_id}/close",
        web::post().to(close_conversation_controller),
    );
}
