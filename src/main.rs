use actix_web::{middleware::from_fn, web, App, HttpServer};
use leptos::logging::{error, log};
use wanderlust::api;
use wanderlust::config::Config;
use wanderlust::db::Database;
use wanderlust::method_override::method_override;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::load().await;

    // Initialize the database
    let db = Database::new(&config.db_path).map_err(|e| {
        error!("[DB] Failed to open {}: {}", config.db_path, e);
        std::io::Error::other(e)
    })?;
    db.create_schema().await.map_err(std::io::Error::other)?;
    log!("[DB] Schema ready");

    let db = web::Data::new(db);
    let public_dir = config.public_dir.clone();
    log!("listening on http://{}", config.addr);

    HttpServer::new(move || {
        App::new()
            .app_data(db.clone())
            .wrap(from_fn(method_override))
            .service(api::static_files(&public_dir))
            .configure(api::configure)
            .default_service(web::to(api::not_found))
    })
    .bind(config.addr)?
    .run()
    .await
}
