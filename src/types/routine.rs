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

const DEFAULT_WAKE: &str = "07:00";
const DEFAULT_SLEEP: &str = "22:30";

/// The user's daily schedule.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Routine {
    pub wake_time: String,
    pub sleep_time: String,
    /// Free-form list of classes and meetings.
    pub schedule: String,
}

impl Default for Routine {
    fn default() -> Self {
        Self {
            wake_time: DEFAULT_WAKE.to_string(),
            sleep_time: DEFAULT_SLEEP.to_string(),
            schedule: String::new(),
        }
    }
}

impl Routine {
    /// The one-line summary shown on the preview screen.
    pub fn summary(&self) -> String {
        let wake = if self.wake_time.trim().is_empty() {
            "7:00"
        } else {
            self.wake_time.trim()
        };
        let sleep = if self.sleep_time.trim().is_empty() {
            DEFAULT_SLEEP
        } else {
            self.sleep_time.trim()
        };
        format!("Wake {wake} • Sleep {sleep}")
    }
}
