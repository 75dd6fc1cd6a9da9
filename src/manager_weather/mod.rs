pub mod errors;
pub mod models;

use std::time::Duration;
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use crate::manager_weather::errors::WeatherError;
use crate::manager_weather::models::{CurrentWeather, Forecast, ForecastDay, OwCurrent, OwDailyForecast, WeatherDetails};

/// Trait for anything that can answer weather questions about a city.
///
/// The handlers only know about this trait, so the real upstream client
/// can be swapped for a stub in tests.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError>;
    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError>;
}

/// Struct for managing weather lookups against the OpenWeather API
pub struct OpenWeather {
    client: Client,
    base_url: String,
    api_key: String,
    forecast_days: u8,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching current weather and
    /// forecasts from the upstream API
    ///
    /// # Arguments
    ///
    /// * 'base_url' - base url of the upstream weather API
    /// * 'api_key' - key used to authenticate against the upstream API
    /// * 'forecast_days' - number of days to request in a forecast
    pub fn new(base_url: &str, api_key: &str, forecast_days: u8) -> Result<OpenWeather, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            forecast_days,
        })
    }

    /// Performs one GET against the upstream API and returns the response body.
    /// A 4xx status is reported as an unknown city, any other non-success
    /// status as an upstream failure.
    ///
    /// # Arguments
    ///
    /// * 'url' - full url of the upstream endpoint
    /// * 'query' - query parameters, city included
    /// * 'city' - the city the request is about
    async fn fetch(&self, url: &str, query: &[(&str, &str)], city: &str) -> Result<String, WeatherError> {
        let req = self.client
            .get(url)
            .query(query)
            .send().await?;

        let status = req.status();
        if status.is_client_error() {
            return Err(WeatherError::CityNotFound(city.to_string()));
        }
        if !status.is_success() {
            return Err(WeatherError::Upstream(format!("error while fetching weather data: {}", status)));
        }

        Ok(req.text().await?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeather {
    /// Retrieves the current weather for the given city.
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city to look up
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        let json = self.fetch(
            &url,
            &[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")],
            city,
        ).await?;

        let raw: OwCurrent = serde_json::from_str(&json)?;

        let timestamp = DateTime::from_timestamp(raw.dt, 0)
            .ok_or_else(|| WeatherError::Upstream(format!("invalid timestamp in response: {}", raw.dt)))?;

        let description = raw.weather.into_iter().next()
            .map(|c| c.description)
            .ok_or_else(|| WeatherError::Upstream("no weather condition in response".to_string()))?;

        Ok(CurrentWeather {
            city: raw.name,
            country: raw.sys.country,
            timestamp,
            weather: WeatherDetails {
                temperature: raw.main.temp,
                humidity: raw.main.humidity,
                wind_speed: raw.wind.speed,
                description,
            },
        })
    }

    /// Retrieves a daily forecast for the given city, one entry per day in
    /// the order the upstream API returned them.
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city to look up
    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        let url = format!("{}/forecast/daily", self.base_url);
        let days = self.forecast_days.to_string();
        let json = self.fetch(
            &url,
            &[("q", city), ("cnt", days.as_str()), ("appid", self.api_key.as_str()), ("units", "metric")],
            city,
        ).await?;

        let raw: OwDailyForecast = serde_json::from_str(&json)?;

        let mut forecast: Vec<ForecastDay> = Vec::new();
        for entry in raw.list {
            let day = DateTime::from_timestamp(entry.dt, 0)
                .ok_or_else(|| WeatherError::Upstream(format!("invalid timestamp in forecast: {}", entry.dt)))?
                .date_naive();

            forecast.push(ForecastDay {
                day,
                temperature: entry.temp.day,
                humidity: entry.humidity,
            });
        }

        if forecast.is_empty() {
            Err(WeatherError::Upstream(format!("empty forecast received for {}", city)))
        } else {
            Ok(Forecast { forecast })
        }
    }
}
