// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;

use crate::config::Config;
use crate::error::Fallible;
use crate::forecast::countdown::hours_label;
use crate::forecast::countdown::hours_until_next_wake;
use crate::forecast::fetch::load_forecast;
use crate::forecast::resolve::ForecastSample;
use crate::forecast::resolve::WAKE_HOUR;
use crate::types::timestamp::Timestamp;

#[derive(ValueEnum, Clone)]
pub enum ForecastFormat {
    /// Human-readable summary.
    Text,
    /// JSON output.
    Json,
}

impl Display for ForecastFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastFormat::Text => write!(f, "text"),
            ForecastFormat::Json => write!(f, "json"),
        }
    }
}

pub async fn print_forecast(config: &Config, format: ForecastFormat) -> Fallible<()> {
    let sample = load_forecast(&config.weather).await?;
    match format {
        ForecastFormat::Text => {
            let hours = hours_until_next_wake(Timestamp::now().local_naive());
            println!("{}", summary(&sample, hours));
        }
        ForecastFormat::Json => {
            let json = serde_json::to_string_pretty(&sample)?;
            println!("{json}");
        }
    }
    Ok(())
}

fn summary(sample: &ForecastSample, hours_until_wake: i64) -> String {
    [
        format!(
            "{WAKE_HOUR}:00 AM Wake-Up {}",
            hours_label(hours_until_wake)
        ),
        format!(
            "{} {}°F, {}",
            sample.emoji,
            sample.temperature,
            sample.condition.label()
        ),
        format!("Sunrise: {}", sample.sunrise),
        format!("Precipitation: {}%", sample.precipitation_probability),
        format!("Tip: {}", sample.tip),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::condition::Condition;
    use crate::forecast::condition::outlook_for;

    fn sample() -> ForecastSample {
        let outlook = outlook_for(80);
        ForecastSample {
            temperature: 58,
            condition: outlook.condition,
            emoji: outlook.emoji(),
            sunrise: "6:29 AM".to_string(),
            precipitation_probability: 65,
            weathercode: 80,
            tip: outlook.tip,
        }
    }

    #[test]
    fn test_summary() {
        let text = summary(&sample(), 9);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "7:00 AM Wake-Up (in 9 hours)");
        assert_eq!(lines[1], "🌧️ 58°F, Rain Showers");
        assert_eq!(lines[2], "Sunrise: 6:29 AM");
        assert_eq!(lines[3], "Precipitation: 65%");
        assert!(lines[4].starts_with("Tip: "));
    }

    #[test]
    fn test_json_shape() -> Fallible<()> {
        let json = serde_json::to_value(sample())?;
        assert_eq!(json["temperature"], 58);
        assert_eq!(json["condition"], "Rain Showers");
        assert_eq!(json["precipitationProbability"], 65);
        assert_eq!(json["sunrise"], "6:29 AM");
        assert_eq!(sample().condition, Condition::RainShowers);
        Ok(())
    }
}
