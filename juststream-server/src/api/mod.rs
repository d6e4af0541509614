use actix_web::{HttpResponse, Responder, get, web};

use crate::build_info;

#[get("/build-info")]
async fn get_build_info() -> impl Responder {
    HttpResponse::Ok().json(build_info::get())
}

pub fn register_handlers(app: &mut web::ServiceConfig) {
    app.service(web::scope("api").service(get_build_info));
}
