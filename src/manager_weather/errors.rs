use std::fmt;

#[derive(Debug)]
pub enum WeatherError {
    CityNotFound(String),
    Upstream(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeatherError::CityNotFound(city) => write!(f, "WeatherError::CityNotFound: {}", city),
            WeatherError::Upstream(e) => write!(f, "WeatherError::Upstream: {}", e),
        }
    }
}
impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        WeatherError::Upstream(e.to_string())
    }
}
impl From<serde_json::Error> for WeatherError {
    fn from(e: serde_json::Error) -> Self {
        WeatherError::Upstream(e.to_string())
    }
}
