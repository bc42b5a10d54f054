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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;

/// The config file read when none is named on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "mornova.toml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The address the UI server listens on.
    pub bind: String,
    /// Whether `serve` opens the UI in a browser.
    pub open_browser: bool,
    pub weather: WeatherConfig,
    pub theme: Theme,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeatherConfig {
    /// The Open-Meteo forecast endpoint.
    pub endpoint: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Upper bound on the whole request, in seconds.
    pub timeout_secs: u64,
}

/// How screens are drawn. Passed to every template.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub night_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            open_browser: true,
            weather: WeatherConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            latitude: 35.9940,
            longitude: -78.8986,
            timeout_secs: 10,
        }
    }
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self { night_mode: true }
    }
}

impl Theme {
    pub fn body_class(&self) -> &'static str {
        if self.night_mode { "night" } else { "day" }
    }
}

impl Config {
    /// Loads the config file at `path`. Without a path, reads
    /// `mornova.toml` from the current directory if it exists, and falls
    /// back to the defaults otherwise.
    pub fn load(path: Option<String>) -> Fallible<Self> {
        match path {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return fail("config file does not exist.");
                }
                Self::from_file(&path)
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults.");
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Fallible<Self> {
        log::debug!("Loading config from {}", path.display());
        let content = read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let config: Config = toml::from_str(content)?;
        if config.weather.timeout_secs == 0 {
            return fail("weather.timeout_secs must be positive.");
        }
        if !(-90.0..=90.0).contains(&config.weather.latitude) {
            return fail("weather.latitude must be between -90 and 90.");
        }
        if !(-180.0..=180.0).contains(&config.weather.longitude) {
            return fail("weather.longitude must be between -180 and 180.");
        }
        Ok(config)
    }
}
