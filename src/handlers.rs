use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use crate::manager_weather::errors::WeatherError;
use crate::AppState;

#[derive(Deserialize, Debug)]
struct CityQuery {
    city: String,
}

#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

/// Maps an upstream error to the corresponding HTTP response
///
/// # Arguments
///
/// * 'err' - the error reported by the weather provider
fn error_response(err: WeatherError) -> HttpResponse {
    match err {
        WeatherError::CityNotFound(city) => {
            info!("city not known upstream: {}", city);
            HttpResponse::NotFound().json(ErrorDetail {
                detail: format!("Ville '{}' non trouvée", city),
            })
        }
        e => {
            error!("failed to reach the weather API: {}", e);
            HttpResponse::InternalServerError().json(ErrorDetail {
                detail: "Erreur de connexion à l'API météo".to_string(),
            })
        }
    }
}

fn blank_city_response() -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorDetail {
        detail: "Paramètre 'city' manquant ou vide".to_string(),
    })
}

// GET /weather/current?city=Paris
#[get("/weather/current")]
pub async fn current_weather(params: web::Query<CityQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    if params.city.trim().is_empty() {
        return blank_city_response();
    }

    match data.weather.current_weather(&params.city).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => error_response(e),
    }
}

// GET /weather/forecast?city=Paris
#[get("/weather/forecast")]
pub async fn forecast(params: web::Query<CityQuery>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    if params.city.trim().is_empty() {
        return blank_city_response();
    }

    match data.weather.forecast(&params.city).await {
        Ok(forecast) => HttpResponse::Ok().json(forecast),
        Err(e) => error_response(e),
    }
}
