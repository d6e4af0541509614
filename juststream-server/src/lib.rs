use actix_web::{App, HttpServer, dev::Server};

use std::net::TcpListener;

pub mod build_info;
pub mod cfg;
pub mod telemetry;

mod api;
mod static_files;

/// Serves the site bundle and the API on `listener`.
pub fn run_app(listener: TcpListener) -> anyhow::Result<Server> {
    let server = HttpServer::new(|| {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(api::register_handlers)
            .configure(static_files::register_static_files)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
