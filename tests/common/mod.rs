#![allow(dead_code)]

use actix_web::{body::MessageBody, dev::ServiceResponse, http::header};
use wanderlust::db::Database;

pub const PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

// Same app wiring as main
macro_rules! init_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db))
                .wrap(actix_web::middleware::from_fn(
                    wanderlust::method_override::method_override,
                ))
                .service(wanderlust::api::static_files($crate::common::PUBLIC_DIR))
                .configure(wanderlust::api::configure)
                .default_service(actix_web::web::to(wanderlust::api::not_found)),
        )
        .await
    };
}
pub(crate) use init_app;

pub async fn test_db() -> Database {
    let db = Database::new(":memory:").unwrap();
    db.create_schema().await.unwrap();
    db
}

pub fn listing_form(title: &str, price: &str) -> Vec<(&'static str, String)> {
    vec![
        ("listing[title]", title.to_string()),
        ("listing[description]", "A quiet place in the hills".to_string()),
        ("listing[image]", "".to_string()),
        ("listing[price]", price.to_string()),
        ("listing[location]", "Manali".to_string()),
        ("listing[country]", "India".to_string()),
    ]
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = actix_web::test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}
