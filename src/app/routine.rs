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

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::Redirect;
use maud::Markup;
use maud::html;

use crate::app::screen::Screen;
use crate::app::state::ServerState;
use crate::app::template::lamp;
use crate::app::template::page_template;
use crate::app::template::screen_header;
use crate::types::personality::Personality;
use crate::types::routine::Routine;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mut mutable = state.mutable.lock().unwrap();
    let flash = mutable.flash.take();
    let body = routine_body(&mutable.routine, &mutable.personality);
    let html = page_template(state.theme, flash, body);
    (StatusCode::OK, Html(html.into_string()))
}

fn routine_body(routine: &Routine, personality: &Personality) -> Markup {
    html! {
        (screen_header(Screen::Routine))
        (lamp(personality.tone))
        form.glass action=(Screen::Routine.path()) method="post" {
            div.row {
                label {
                    "Wake Time"
                    input type="time" name="wake_time" value=(routine.wake_time);
                }
                label {
                    "Sleep Time"
                    input type="time" name="sleep_time" value=(routine.sleep_time);
                }
            }
            label {
                "Classes/Meetings"
                textarea name="schedule" rows="4"
                    placeholder="Add your schedule (e.g., Math class 8:00 AM Mon/Wed/Fri)" {
                    (routine.schedule)
                }
            }
            input.cta type="submit" value="Save & Continue";
        }
    }
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(routine): Form<Routine>,
) -> Redirect {
    let mut mutable = state.mutable.lock().unwrap();
    log::debug!(
        "Routine saved: wake {} sleep {}",
        routine.wake_time,
        routine.sleep_time
    );
    mutable.routine = routine;
    Redirect::to(Screen::Home.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tone::Tone;

    #[test]
    fn test_form_prefilled() {
        let routine = Routine {
            wake_time: "06:45".to_string(),
            sleep_time: "23:00".to_string(),
            schedule: "Chem lab 9:00 AM Tue".to_string(),
        };
        let html = routine_body(&routine, &Personality::new(None)).into_string();
        assert!(html.contains("value=\"06:45\""));
        assert!(html.contains("Chem lab 9:00 AM Tue"));
        assert!(!html.contains("class=\"lamp\""));
    }

    #[test]
    fn test_lamp_shown_with_personality() {
        let html = routine_body(&Routine::default(), &Personality::new(Some(Tone::Calm)))
            .into_string();
        assert!(html.contains("--accent: #C9C6FF"));
    }
}
