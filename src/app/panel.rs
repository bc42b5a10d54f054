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

use maud::Markup;
use maud::html;

use crate::app::state::Panel;
use crate::forecast::countdown::hours_label;
use crate::forecast::resolve::WAKE_HOUR;

pub fn forecast_panel(panel: &Panel, hours_until_wake: i64) -> Markup {
    html! {
        section.forecast {
            h2 {
                "Tomorrow Morning"
            }
            div.glass {
                @match panel {
                    Panel::Loading => {
                        p.muted {
                            "Loading tomorrow's forecast…"
                        }
                    }
                    Panel::Failed => {
                        p.muted {
                            "Weather data not available"
                        }
                        p.hint {
                            "Please try again later."
                        }
                    }
                    Panel::Ready(sample) => {
                        div.wake {
                            (format!("{WAKE_HOUR}:00 AM Wake-Up"))
                        }
                        div.countdown {
                            (hours_label(hours_until_wake))
                        }
                        hr;
                        div.emoji {
                            (sample.emoji)
                        }
                        div.temperature {
                            (sample.temperature) "°F"
                        }
                        div.condition {
                            (sample.condition.label())
                        }
                        div.sunrise {
                            "Sunrise: " (sample.sunrise)
                        }
                        div.precipitation {
                            "Precipitation: " (sample.precipitation_probability) "%"
                        }
                        hr;
                        div.tip {
                            "💡 Tip: " (sample.tip)
                        }
                    }
                }
            }
        }
    }
}
