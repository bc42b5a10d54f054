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

use maud::DOCTYPE;
use maud::Markup;
use maud::html;

use crate::app::screen::Screen;
use crate::config::Theme;
use crate::types::tone::Tone;

pub fn page_template(theme: Theme, flash: Option<String>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Mornova" }
                link rel="stylesheet" href="/style.css";
            }
            body class=(theme.body_class()) {
                div.screen {
                    @if let Some(message) = flash {
                        div.toast role="status" {
                            (message)
                        }
                    }
                    (body)
                }
                script src="/script.js" {}
            }
        }
    }
}

/// The title bar of every screen except home, with a way back.
pub fn screen_header(screen: Screen) -> Markup {
    html! {
        div.header {
            a.back href=(Screen::Home.path()) aria-label="Back" {
                "←"
            }
            h1 {
                (screen.title())
            }
        }
    }
}

/// The lamp, glowing in the colour of a tone. Hidden without one.
pub fn lamp(tone: Option<Tone>) -> Markup {
    html! {
        @if let Some(tone) = tone {
            div.lamp style=(format!("--accent: {}", tone.accent())) {
                div.glow {}
                div.bulb title=(format!("{tone} Mornova")) {
                    "💡"
                }
            }
        }
    }
}
