use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use qrcode_service::api;
use qrcode_service::config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::load()?;
    let address = config.bind_address();

    log::info!("Starting QR code service on http://{}", address);
    log::info!("Render timeout: {}ms", config.render.timeout_ms);

    let data = web::Data::new(config);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        App::new()
            .app_data(data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
