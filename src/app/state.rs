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

use std::sync::Arc;
use std::sync::Mutex;

use tokio::spawn;

use crate::config::Theme;
use crate::config::WeatherConfig;
use crate::deck::state::DeckState;
use crate::forecast::countdown::hours_until_next_wake;
use crate::forecast::fetch::load_forecast;
use crate::forecast::resolve::ForecastSample;
use crate::types::personality::Personality;
use crate::types::routine::Routine;
use crate::types::rules::Rules;
use crate::types::timestamp::Timestamp;

#[derive(Clone)]
pub struct ServerState {
    pub theme: Theme,
    pub weather: WeatherConfig,
    pub mutable: Arc<Mutex<MutableState>>,
}

pub struct MutableState {
    pub personality: Personality,
    pub deck: DeckState,
    pub routine: Routine,
    pub rules: Rules,
    pub panel: Panel,
    pub hours_until_wake: i64,
    /// A one-time message shown on the next page.
    pub flash: Option<String>,
}

/// The Tomorrow Morning panel.
#[derive(Clone, Debug, PartialEq)]
pub enum Panel {
    Loading,
    Ready(ForecastSample),
    /// Every failure looks the same to the user.
    Failed,
}

impl ServerState {
    /// Fetches the forecast in the background and stores the outcome in the
    /// panel.
    pub fn spawn_forecast(&self) {
        let weather = self.weather.clone();
        let mutable = self.mutable.clone();
        spawn(async move {
            let panel = match load_forecast(&weather).await {
                Ok(sample) => {
                    log::info!(
                        "Tomorrow 7 AM: {}°F, {}",
                        sample.temperature,
                        sample.condition.label()
                    );
                    Panel::Ready(sample)
                }
                Err(e) => {
                    log::warn!("Forecast unavailable: {e}");
                    Panel::Failed
                }
            };
            mutable.lock().unwrap().panel = panel;
        });
    }
}

impl MutableState {
    pub fn new(personality: Personality) -> Self {
        Self {
            deck: DeckState::new(&personality),
            personality,
            routine: Routine::default(),
            rules: Rules::new(),
            panel: Panel::Loading,
            hours_until_wake: hours_until_next_wake(Timestamp::now().local_naive()),
            flash: None,
        }
    }

    /// Called when a screen showing the panel is opened. A failed panel goes
    /// back to loading and the caller must fetch again; a panel that is
    /// loading or ready is left alone, so at most one fetch is in flight.
    pub fn begin_retry(&mut self) -> bool {
        if self.panel == Panel::Failed {
            self.panel = Panel::Loading;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_retry_only_after_failure() {
        let mut mutable = MutableState::new(Personality::default());
        assert!(!mutable.begin_retry());
        assert_eq!(mutable.panel, Panel::Loading);

        mutable.panel = Panel::Failed;
        assert!(mutable.begin_retry());
        assert_eq!(mutable.panel, Panel::Loading);
        // The retry is in flight.
        assert!(!mutable.begin_retry());
    }
}
