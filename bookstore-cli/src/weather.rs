use bookstore_core::WeatherSource;

use crate::prompt;

/// Print one forecast, or keep prompting for cities until `exit`.
pub fn run(source: &dyn WeatherSource, city: Option<String>) -> anyhow::Result<()> {
    if let Some(city) = city {
        println!("{}", forecast(source, &city));
        return Ok(());
    }

    while let Some(city) =
        prompt::text("Enter the city to get the weather forecast or 'exit' to quit:")?
    {
        if is_exit(&city) {
            break;
        }
        println!("{}", forecast(source, &city));
    }

    Ok(())
}

fn forecast(source: &dyn WeatherSource, city: &str) -> String {
    match source.get_weather(city) {
        Ok(report) => report.to_string(),
        Err(err) => err.to_string(),
    }
}

fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("exit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::{StaticWeather, WeatherReport};

    #[test]
    fn exit_is_case_insensitive() {
        assert!(is_exit("exit"));
        assert!(is_exit(" EXIT "));
        assert!(!is_exit("exeter"));
    }

    #[test]
    fn forecast_formats_report_or_error() {
        let source = StaticWeather::new([WeatherReport::new("Tokyo", 75, "Rainy", 70)]);

        assert_eq!(
            forecast(&source, "tokyo"),
            "Weather in Tokyo: 75 degrees, Rainy, Humidity: 70%"
        );
        assert_eq!(forecast(&source, "Oslo"), "Weather data not available for Oslo");
    }
}
