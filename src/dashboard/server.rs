use super::page::Page;
use crate::archive::History;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(addr: String, history: History) -> Result<(), std::io::Error> {
        let state = web::Data::new(history);
        log::info!("starting dashboard on {}", addr);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .configure(routes)
        })
        .workers(2)
        .bind(addr)?
        .run()
        .await
    }
}

/// Route table, shared by the server and its tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/games", web::get().to(games));
}

async fn home(history: web::Data<History>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(Page::from(history.get_ref()).to_string())
}

async fn games(history: web::Data<History>) -> impl Responder {
    HttpResponse::Ok().json(history.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn home_renders_every_game() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(History::sample()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<h2>game1</h2>"));
        assert!(html.contains("<h2>game2</h2>"));
        assert!(html.contains("<td>Scissor</td>"));
        assert!(html.contains("<td>Invalid</td>"));
    }

    #[actix_web::test]
    async fn games_serves_json() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(History::sample()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/games").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["game1"].as_array().unwrap().len(), 4);
        assert_eq!(json["game2"][0]["computerMove"], "Rock");
    }

    #[actix_web::test]
    async fn empty_history_still_renders() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(History::default()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("No games yet"));
    }

    #[actix_web::test]
    async fn unknown_route_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(History::sample()))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/rounds").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
