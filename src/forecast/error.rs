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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

/// Why tomorrow morning's forecast could not be produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The request failed, timed out, returned a non-success status, or
    /// returned a body that is not a forecast document.
    FetchFailed(String),
    /// The payload has no daily series.
    NoDailyData,
    /// No hourly sample exists for tomorrow, or the chosen sample is missing
    /// its temperature or weather code.
    NoMatchingHour,
}

impl Display for ForecastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::FetchFailed(reason) => {
                write!(f, "failed to fetch weather data: {reason}")
            }
            ForecastError::NoDailyData => write!(f, "no daily weather data available"),
            ForecastError::NoMatchingHour => {
                write!(f, "weather data for tomorrow 7 AM not available")
            }
        }
    }
}

impl Error for ForecastError {}
