use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use quizgen_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().unwrap_or_else(|err| {
        eprintln!("fatal: {}", err);
        std::process::exit(1);
    });

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    info!("starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&state.config.allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::new("%a \"%r\" %s origin=%{Origin}i %Dms"))
            .service(handlers::root)
            .service(handlers::generate_quiz)
            .service(handlers::upload_pdf)
    })
    .bind(bind_addr)?
    .run()
    .await
}
