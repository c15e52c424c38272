use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};

use crate::config::AppConfig;
use crate::server_handlers::{help_handler, index_handler, submit_handler};

/// Registra las rutas. Se usa tanto en `run_server` como en los tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handler))
        .route("/help", web::get().to(help_handler))
        .route("/api/submit", web::post().to(submit_handler))
        // ruta de la primera versión del formulario
        .route("/submit", web::post().to(submit_handler));
}

pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    let bind_addr = config.bind_addr();
    let scoring = web::Data::new(config.scoring);
    log::info!("listening on http://{} ({:?})", bind_addr, config.scoring);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(scoring.clone())
            .configure(configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
