use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    /// Degrees Fahrenheit.
    pub temperature: i32,
    pub condition: String,
    pub humidity_pct: u8,
}

impl WeatherReport {
    pub fn new(city: &str, temperature: i32, condition: &str, humidity_pct: u8) -> Self {
        Self {
            city: city.to_string(),
            temperature,
            condition: condition.to_string(),
            humidity_pct,
        }
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weather in {}: {} degrees, {}, Humidity: {}%",
            self.city, self.temperature, self.condition, self.humidity_pct
        )
    }
}

pub trait WeatherSource: fmt::Debug {
    fn get_weather(&self, city: &str) -> anyhow::Result<WeatherReport>;
}

/// Fixed table of reports keyed by city name.
///
/// Queries are normalised to title case, so "new york" and "NEW YORK" both
/// resolve to the "New York" entry.
#[derive(Debug, Clone, Default)]
pub struct StaticWeather {
    reports: HashMap<String, WeatherReport>,
}

impl StaticWeather {
    pub fn new(reports: impl IntoIterator<Item = WeatherReport>) -> Self {
        let reports = reports
            .into_iter()
            .map(|r| (title_case(&r.city), r))
            .collect();
        Self { reports }
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.reports.values().map(|r| r.city.as_str())
    }
}

impl WeatherSource for StaticWeather {
    fn get_weather(&self, city: &str) -> anyhow::Result<WeatherReport> {
        self.reports
            .get(&title_case(city.trim()))
            .cloned()
            .ok_or_else(|| anyhow!("Weather data not available for {city}"))
    }
}

/// Uppercase the first letter of every word and lowercase the rest, where a
/// word starts after any non-alphabetic character.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn source() -> StaticWeather {
        StaticWeather::new(Config::default().weather)
    }

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("TOKYO"), "Tokyo");
        assert_eq!(title_case("rio-de janeiro"), "Rio-De Janeiro");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn lookup_ignores_case() {
        let report = source().get_weather("new YORK").expect("known city");

        assert_eq!(report, WeatherReport::new("New York", 70, "Sunny", 50));
    }

    #[test]
    fn report_display() {
        let report = source().get_weather("London").unwrap();

        assert_eq!(report.to_string(), "Weather in London: 60 degrees, Cloudy, Humidity: 65%");
    }

    #[test]
    fn unknown_city_error() {
        let err = source().get_weather("Paris").unwrap_err();

        assert_eq!(err.to_string(), "Weather data not available for Paris");
    }

    #[test]
    fn lists_configured_cities() {
        let mut cities: Vec<_> = source().cities().map(str::to_string).collect();
        cities.sort();

        assert_eq!(cities, vec!["London", "New York", "Tokyo"]);
    }
}
