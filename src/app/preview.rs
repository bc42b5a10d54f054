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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::Redirect;
use maud::Markup;
use maud::html;

use crate::app::panel::forecast_panel;
use crate::app::screen::Screen;
use crate::app::state::MutableState;
use crate::app::state::ServerState;
use crate::app::template::lamp;
use crate::app::template::page_template;
use crate::app::template::screen_header;
use crate::types::card::card_for;
use crate::types::tone::Tone;

#[derive(Debug, PartialEq)]
enum Speaker {
    Lamp,
    User,
}

/// A sample morning conversation in the chosen personality's voice.
fn chat_preview(tone: Option<Tone>) -> Vec<(Speaker, String)> {
    let emoji = match tone {
        Some(Tone::Playful) => "🌟",
        Some(Tone::Calm) => "🌅",
        _ => "☀️",
    };
    let reply = match tone {
        Some(Tone::Playful) => {
            "I hear you! But remember, you have that 8am class. How about we start with some gentle light?"
        }
        Some(Tone::Calm) => {
            "I understand. Let me gradually increase the light to help you wake naturally."
        }
        _ => "Your 8am class starts soon. Time to get moving!",
    };
    vec![
        (
            Speaker::Lamp,
            format!("Good morning! {emoji} Ready to start your day?"),
        ),
        (Speaker::User, "Not really... 5 more minutes?".to_string()),
        (Speaker::Lamp, reply.to_string()),
    ]
}

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mut mutable = state.mutable.lock().unwrap();
    let flash = mutable.flash.take();
    let body = preview_body(&mutable);
    if mutable.begin_retry() {
        log::debug!("Retrying the forecast.");
        state.spawn_forecast();
    }
    let html = page_template(state.theme, flash, body);
    (StatusCode::OK, Html(html.into_string()))
}

fn preview_body(mutable: &MutableState) -> Markup {
    let tone = mutable.personality.tone;
    html! {
        (screen_header(Screen::Preview))
        (lamp(tone))
        div.chat {
            h3 { "Chat Preview" }
            @for (speaker, text) in chat_preview(tone) {
                @match speaker {
                    Speaker::Lamp => { div.bubble.lamp-says { p { (text) } } }
                    Speaker::User => { div.bubble.user-says { p { (text) } } }
                }
            }
        }
        div.glass.settings {
            h3 { "Your Settings" }
            div {
                span.muted { "Personality:" }
                span { (tone.map(|t| t.as_str()).unwrap_or("")) }
            }
            @if let Some(tone) = tone {
                div {
                    span.muted { "Light Effect:" }
                    span { (card_for(tone).effect.as_str()) }
                }
            }
            div {
                span.muted { "Schedule:" }
                span { (mutable.routine.summary()) }
            }
            div {
                span.muted { "Active Rules:" }
                span { (format!("{} selected", mutable.rules.len())) }
            }
        }
        (forecast_panel(&mutable.panel, mutable.hours_until_wake))
        form action=(Screen::Preview.path()) method="post" {
            input.cta type="submit" value="✨ Activate Mornova";
        }
    }
}

pub async fn post_handler(State(state): State<ServerState>) -> Redirect {
    let mut mutable = state.mutable.lock().unwrap();
    log::info!(
        "Activated with personality {:?} and {} rules",
        mutable.personality.tone,
        mutable.rules.len()
    );
    mutable.flash = Some("Mornova activated! Your settings have been saved.".to_string());
    Redirect::to(Screen::Home.path())
}
