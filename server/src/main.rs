#[macro_use]
extern crate log;

use std::io;

use actix_web::{
    middleware::{Logger, NormalizePath, TrailingSlash},
    web, App, HttpServer,
};
use dotenv::dotenv;

mod config;
mod handlers;
mod routes;
mod templates;
mod tests;

use crate::config::Config;
use crate::routes::{not_found, routes};
use crate::templates::Templates;

fn startup_error<E: ToString>(err: E) -> io::Error {
    let message = err.to_string();
    error!("Failed to start server - {}", message);
    io::Error::new(io::ErrorKind::Other, message)
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(startup_error)?;
    let pool = web::Data::new(db::new_pool(&config.database_url).map_err(startup_error)?);
    let templates = web::Data::new(Templates::new().map_err(startup_error)?);

    info!("Listening on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .app_data(pool.clone())
            .app_data(templates.clone())
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await
}
