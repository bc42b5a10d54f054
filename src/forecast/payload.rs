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

use serde::Deserialize;

/// The subset of an Open-Meteo forecast response that the resolver reads.
///
/// Every series defaults to empty, so a response missing a block or a field
/// still decodes. Hourly series are parallel: index `i` of each refers to
/// `hourly.time[i]`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawForecastPayload {
    #[serde(default)]
    pub daily: DailySeries,
    #[serde(default)]
    pub hourly: HourlySeries,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DailySeries {
    /// Dates, today first.
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub sunrise: Vec<Option<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HourlySeries {
    /// Local timestamps of the form `YYYY-MM-DDTHH:MM`.
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub weathercode: Vec<Option<i64>>,
    #[serde(default)]
    pub precipitation_probability: Vec<Option<i64>>,
}

impl HourlySeries {
    pub fn temperature_at(&self, index: usize) -> Option<f64> {
        self.temperature_2m.get(index).copied().flatten()
    }

    pub fn weathercode_at(&self, index: usize) -> Option<i64> {
        self.weathercode.get(index).copied().flatten()
    }

    pub fn precipitation_at(&self, index: usize) -> Option<i64> {
        self.precipitation_probability.get(index).copied().flatten()
    }
}
