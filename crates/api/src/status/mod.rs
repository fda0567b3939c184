use actix_web::{web, HttpResponse};
use festivo_api_structs::get_service_health::APIResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Ok!\r\n".into(),
    })
}
