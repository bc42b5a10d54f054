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

use chrono::DateTime;
use chrono::Days;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Timelike;
use serde::Serialize;

use crate::forecast::condition::Condition;
use crate::forecast::condition::outlook_for;
use crate::forecast::error::ForecastError;
use crate::forecast::payload::RawForecastPayload;

/// The hour the lamp wakes you up.
pub const WAKE_HOUR: u32 = 7;

/// Tomorrow morning's weather, ready for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSample {
    /// Degrees Fahrenheit.
    pub temperature: i64,
    pub condition: Condition,
    pub emoji: &'static str,
    /// Sunrise as `H:MM AM/PM`, or `N/A`.
    pub sunrise: String,
    /// Percent chance of precipitation.
    pub precipitation_probability: i64,
    pub weathercode: i64,
    pub tip: &'static str,
}

/// How the hourly sample for tomorrow morning was found.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Tier {
    Exact,
    Nearest,
    Any,
}

pub fn resolve(payload: &RawForecastPayload) -> Result<ForecastSample, ForecastError> {
    let tomorrow = tomorrow_date(&payload.daily.time)?;
    let sunrise_raw = sunrise_raw(&payload.daily.sunrise);

    let (index, tier) =
        find_target_index(&payload.hourly.time, &tomorrow).ok_or(ForecastError::NoMatchingHour)?;
    log::debug!(
        "Using hourly sample {} ({tier:?} match)",
        payload.hourly.time[index]
    );

    let temperature = payload
        .hourly
        .temperature_at(index)
        .ok_or(ForecastError::NoMatchingHour)?;
    let weathercode = payload
        .hourly
        .weathercode_at(index)
        .ok_or(ForecastError::NoMatchingHour)?;
    let precipitation_probability = payload.hourly.precipitation_at(index).unwrap_or(0);
    let outlook = outlook_for(weathercode);

    let sunrise = if sunrise_raw.is_empty() {
        "N/A".to_string()
    } else {
        format_time(sunrise_raw)
    };

    Ok(ForecastSample {
        temperature: round_half_up(temperature),
        condition: outlook.condition,
        emoji: outlook.emoji(),
        sunrise,
        precipitation_probability,
        weathercode,
        tip: outlook.tip,
    })
}

/// Finds tomorrow's date, as `YYYY-MM-DD`, from the daily series.
fn tomorrow_date(days: &[String]) -> Result<String, ForecastError> {
    match days {
        [] => Err(ForecastError::NoDailyData),
        [today] => {
            let today = NaiveDate::parse_from_str(date_part(today), "%Y-%m-%d")
                .map_err(|_| ForecastError::NoDailyData)?;
            let tomorrow = today
                .checked_add_days(Days::new(1))
                .ok_or(ForecastError::NoDailyData)?;
            Ok(tomorrow.format("%Y-%m-%d").to_string())
        }
        [_, tomorrow, ..] => Ok(date_part(tomorrow).to_string()),
    }
}

/// Rounds to the nearest integer, with halves going up (-2.5 becomes -2).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn date_part(s: &str) -> &str {
    s.split('T').next().unwrap_or(s)
}

fn sunrise_raw(sunrise: &[Option<String>]) -> &str {
    sunrise
        .get(1)
        .and_then(|s| s.as_deref())
        .or_else(|| sunrise.first().and_then(|s| s.as_deref()))
        .unwrap_or("")
}

/// Searches the hourly timestamps for tomorrow morning: exactly 7 AM first,
/// then anything from 6 to 8 AM (7 preferred), then any hour of tomorrow.
fn find_target_index(times: &[String], tomorrow: &str) -> Option<(usize, Tier)> {
    let tomorrow_times = move || {
        times
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.starts_with(tomorrow))
    };

    let exact_marker = format!("T{WAKE_HOUR:02}:00");
    if let Some((i, _)) = tomorrow_times().find(|(_, t)| t.contains(&exact_marker)) {
        return Some((i, Tier::Exact));
    }

    let mut nearest: Option<usize> = None;
    for (i, t) in tomorrow_times() {
        match hour_of(t) {
            Some(hour) if hour == WAKE_HOUR => return Some((i, Tier::Nearest)),
            Some(hour) if (WAKE_HOUR - 1..=WAKE_HOUR + 1).contains(&hour) => {
                if nearest.is_none() {
                    nearest = Some(i);
                }
            }
            _ => {}
        }
    }
    if let Some(i) = nearest {
        return Some((i, Tier::Nearest));
    }

    tomorrow_times().next().map(|(i, _)| (i, Tier::Any))
}

/// Reads the two-digit hour following the `T` of a timestamp.
fn hour_of(timestamp: &str) -> Option<u32> {
    let (_, rest) = timestamp.split_once('T')?;
    let digits = rest.get(..2)?;
    if rest.as_bytes().get(2) != Some(&b':') {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Formats a timestamp as `H:MM AM/PM` in the viewer's time zone. Strings
/// that do not parse are returned as-is.
pub fn format_time(raw: &str) -> String {
    match parse_local(raw) {
        Some(dt) => {
            let hour = dt.hour();
            let am_pm = if hour >= 12 { "PM" } else { "AM" };
            let display_hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{display_hour}:{:02} {am_pm}", dt.minute())
        }
        None => raw.to_string(),
    }
}

fn parse_local(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::payload::DailySeries;
    use crate::forecast::payload::HourlySeries;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// A payload whose hourly series has one sample per listed time, with
    /// temperature 50 + i and weather code 0.
    fn payload(days: &[&str], sunrise: &[&str], hours: &[&str]) -> RawForecastPayload {
        RawForecastPayload {
            daily: DailySeries {
                time: strings(days),
                sunrise: sunrise.iter().map(|s| Some(s.to_string())).collect(),
            },
            hourly: HourlySeries {
                time: strings(hours),
                temperature_2m: (0..hours.len()).map(|i| Some(50.0 + i as f64)).collect(),
                weathercode: vec![Some(0); hours.len()],
                precipitation_probability: vec![Some(20); hours.len()],
            },
        }
    }

    #[test]
    fn test_resolve_exact_match() -> Result<(), ForecastError> {
        let p = payload(
            &["2024-05-01", "2024-05-02"],
            &["2024-05-01T06:24", "2024-05-02T06:23"],
            &[
                "2024-05-01T07:00",
                "2024-05-02T06:00",
                "2024-05-02T07:00",
                "2024-05-02T08:00",
            ],
        );
        let sample = resolve(&p)?;
        assert_eq!(sample.temperature, 52);
        assert_eq!(sample.condition, Condition::Clear);
        assert_eq!(sample.emoji, "☀️");
        assert_eq!(sample.sunrise, "6:23 AM");
        assert_eq!(sample.precipitation_probability, 20);
        assert_eq!(sample.weathercode, 0);
        Ok(())
    }

    #[test]
    fn test_exact_tier_wins_over_earlier_candidates() {
        let times = strings(&["2024-05-02T00:00", "2024-05-02T06:00", "2024-05-02T07:00"]);
        assert_eq!(
            find_target_index(&times, "2024-05-02"),
            Some((2, Tier::Exact))
        );
    }

    #[test]
    fn test_nearest_tier_takes_first_of_six_or_eight() {
        let times = strings(&[
            "2024-05-02T05:00",
            "2024-05-02T08:00",
            "2024-05-02T06:00",
        ]);
        assert_eq!(
            find_target_index(&times, "2024-05-02"),
            Some((1, Tier::Nearest))
        );
    }

    #[test]
    fn test_nearest_tier_prefers_seven() {
        // Half-hourly data: no `T07:00`, but an hour-7 sample exists.
        let times = strings(&[
            "2024-05-02T06:30",
            "2024-05-02T07:30",
            "2024-05-02T08:30",
        ]);
        assert_eq!(
            find_target_index(&times, "2024-05-02"),
            Some((1, Tier::Nearest))
        );
    }

    #[test]
    fn test_any_tier() {
        let times = strings(&[
            "2024-05-01T23:00",
            "2024-05-02T00:00",
            "2024-05-02T01:00",
        ]);
        assert_eq!(
            find_target_index(&times, "2024-05-02"),
            Some((1, Tier::Any))
        );
    }

    #[test]
    fn test_no_hours_for_tomorrow() {
        let p = payload(
            &["2024-05-01", "2024-05-02"],
            &[],
            &["2024-05-01T07:00"],
        );
        assert_eq!(resolve(&p), Err(ForecastError::NoMatchingHour));
    }

    #[test]
    fn test_no_daily_data() {
        let p = payload(&[], &[], &["2024-05-02T07:00"]);
        assert_eq!(resolve(&p), Err(ForecastError::NoDailyData));
    }

    #[test]
    fn test_missing_temperature_at_target() {
        let mut p = payload(
            &["2024-05-01", "2024-05-02"],
            &[],
            &["2024-05-02T07:00"],
        );
        p.hourly.temperature_2m = vec![None];
        assert_eq!(resolve(&p), Err(ForecastError::NoMatchingHour));
    }

    #[test]
    fn test_missing_weathercode_at_target() {
        let mut p = payload(
            &["2024-05-01", "2024-05-02"],
            &[],
            &["2024-05-02T07:00"],
        );
        p.hourly.weathercode = Vec::new();
        assert_eq!(resolve(&p), Err(ForecastError::NoMatchingHour));
    }

    #[test]
    fn test_zero_degrees_is_a_reading() -> Result<(), ForecastError> {
        let mut p = payload(
            &["2024-01-14", "2024-01-15"],
            &[],
            &["2024-01-15T07:00"],
        );
        p.hourly.temperature_2m = vec![Some(0.0)];
        assert_eq!(resolve(&p)?.temperature, 0);
        Ok(())
    }

    #[test]
    fn test_rounding_and_missing_precipitation() -> Result<(), ForecastError> {
        let mut p = payload(
            &["2024-05-01", "2024-05-02"],
            &[],
            &["2024-05-02T07:00"],
        );
        p.hourly.temperature_2m = vec![Some(61.5)];
        p.hourly.weathercode = vec![Some(61)];
        p.hourly.precipitation_probability = vec![None];
        let sample = resolve(&p)?;
        assert_eq!(sample.temperature, 62);
        assert_eq!(sample.condition, Condition::Rain);
        assert_eq!(sample.precipitation_probability, 0);
        assert_eq!(sample.sunrise, "N/A");
        Ok(())
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(61.5), 62);
        assert_eq!(round_half_up(61.49), 61);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
    }

    #[test]
    fn test_tomorrow_from_single_day() -> Result<(), ForecastError> {
        assert_eq!(tomorrow_date(&strings(&["2024-01-31"]))?, "2024-02-01");
        assert_eq!(tomorrow_date(&strings(&["2023-12-31"]))?, "2024-01-01");
        assert_eq!(tomorrow_date(&strings(&["2024-02-28"]))?, "2024-02-29");
        assert_eq!(
            tomorrow_date(&strings(&["2024-03-09T00:00"]))?,
            "2024-03-10"
        );
        Ok(())
    }

    #[test]
    fn test_tomorrow_from_second_day() -> Result<(), ForecastError> {
        assert_eq!(
            tomorrow_date(&strings(&["2024-05-01", "2024-05-02T00:00"]))?,
            "2024-05-02"
        );
        Ok(())
    }

    #[test]
    fn test_single_day_payload_uses_todays_sunrise() -> Result<(), ForecastError> {
        let p = payload(
            &["2024-01-31"],
            &["2024-01-31T07:18"],
            &["2024-01-31T07:00", "2024-02-01T07:00"],
        );
        let sample = resolve(&p)?;
        assert_eq!(sample.temperature, 51);
        assert_eq!(sample.sunrise, "7:18 AM");
        Ok(())
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2024-05-02T06:05"), "6:05 AM");
        assert_eq!(format_time("2024-05-02T00:30"), "12:30 AM");
        assert_eq!(format_time("2024-05-02T12:00"), "12:00 PM");
        assert_eq!(format_time("2024-05-02T19:45:10"), "7:45 PM");
    }

    #[test]
    fn test_format_time_passes_malformed_input_through() {
        assert_eq!(format_time("sometime tomorrow"), "sometime tomorrow");
        assert_eq!(format_time("2024-05-02T25:00"), "2024-05-02T25:00");
    }

    #[test]
    fn test_hour_of() {
        assert_eq!(hour_of("2024-05-02T07:00"), Some(7));
        assert_eq!(hour_of("2024-05-02T18:30"), Some(18));
        assert_eq!(hour_of("2024-05-02"), None);
        assert_eq!(hour_of("2024-05-02T7:00"), None);
    }
}
