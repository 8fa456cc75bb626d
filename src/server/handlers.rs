use crate::deal::Deal;
use crate::demo;
use crate::render::Assets;
use crate::render::scene;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

/// cache-disabling directives so every call yields fresh randomness
const NO_CACHE: (&str, &str) = (
    "Cache-Control",
    "no-store, no-cache, must-revalidate, proxy-revalidate",
);

pub async fn starting_hand(assets: web::Data<Assets>) -> impl Responder {
    let deal = Deal::new();
    log::info!("{}", deal);
    let render = web::block(move || scene::compose(&assets, &deal)).await;
    match render {
        Ok(Ok(png)) => HttpResponse::Ok()
            .content_type("image/png")
            .insert_header(NO_CACHE)
            .insert_header(("Pragma", "no-cache"))
            .insert_header(("Expires", "0"))
            .body(png),
        Ok(Err(e)) => {
            log::error!("render failed: {:#}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
        Err(e) => {
            log::error!("render worker failed: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

pub async fn examples(req: HttpRequest) -> impl Responder {
    HttpResponse::Ok().json(demo::examples(&base(&req)))
}

pub async fn index(req: HttpRequest) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(demo::page(&base(&req)))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

fn base(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}
