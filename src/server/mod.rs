pub mod handlers;

use crate::render::Assets;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::path::PathBuf;

pub async fn run(bind: &str, dir: PathBuf) -> Result<(), std::io::Error> {
    let assets = web::Data::new(Assets::from(dir));
    log::info!("starting HTTP server on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(assets.clone())
            .route("/", web::get().to(handlers::index))
            .route("/health", web::get().to(handlers::health))
            .service(
                web::scope("/api")
                    .route("/starting-hand", web::get().to(handlers::starting_hand))
                    .route("/examples", web::get().to(handlers::examples)),
            )
    })
    .bind(bind)?
    .run()
    .await
}
