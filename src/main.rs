mod errors;
mod logging;
mod initialization;
mod handlers;
mod manager_weather;

use std::sync::Arc;
use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::handlers::{current_weather, forecast};
use crate::initialization::config;
use crate::manager_weather::{OpenWeather, WeatherProvider};

struct AppState {
    weather: Arc<dyn WeatherProvider>,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    logging::setup_logger()?;

    let weather: Arc<dyn WeatherProvider> = Arc::new(OpenWeather::new(
        &config.open_weather.base_url,
        &config.open_weather.api_key,
        config.open_weather.forecast_days,
    )?);

    info!("starting weather proxy on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState { weather: weather.clone() }))
            .service(current_weather)
            .service(forecast)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
