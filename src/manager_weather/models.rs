use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Deserialize)]
pub struct OwSys {
    pub country: String,
}

#[derive(Deserialize)]
pub struct OwMain {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Deserialize)]
pub struct OwWind {
    pub speed: f64,
}

#[derive(Deserialize)]
pub struct OwCondition {
    pub description: String,
}

#[derive(Deserialize)]
pub struct OwCurrent {
    pub name: String,
    pub dt: i64,
    pub sys: OwSys,
    pub main: OwMain,
    pub wind: OwWind,
    pub weather: Vec<OwCondition>,
}

#[derive(Deserialize)]
pub struct OwDailyTemp {
    pub day: f64,
}

#[derive(Deserialize)]
pub struct OwDailyEntry {
    pub dt: i64,
    pub temp: OwDailyTemp,
    pub humidity: u8,
}

#[derive(Deserialize)]
pub struct OwDailyForecast {
    pub list: Vec<OwDailyEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherDetails {
    pub temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub timestamp: DateTime<Utc>,
    pub weather: WeatherDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastDay {
    pub day: NaiveDate,
    pub temperature: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub forecast: Vec<ForecastDay>,
}
