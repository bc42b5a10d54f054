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
use serde::Deserialize;

use crate::app::panel::forecast_panel;
use crate::app::screen::Screen;
use crate::app::state::MutableState;
use crate::app::state::ServerState;
use crate::app::template::lamp;
use crate::app::template::page_template;
use crate::deck::state::DeckState;
use crate::types::tone::Tone;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mut mutable = state.mutable.lock().unwrap();
    let flash = mutable.flash.take();
    let body = home_body(&mutable);
    if mutable.begin_retry() {
        log::debug!("Retrying the forecast.");
        state.spawn_forecast();
    }
    let html = page_template(state.theme, flash, body);
    (StatusCode::OK, Html(html.into_string()))
}

fn home_body(mutable: &MutableState) -> Markup {
    let deck = &mutable.deck;
    let tone = shown_tone(deck, mutable.personality.tone);
    html! {
        div.brand {
            span.sparkle { "✨" }
            h1 { "Mornova" }
        }
        div.greeting {
            h1 { "Good Evening" }
            div.status {
                p { (status_line(tone)) }
                div.live { span.dot {} span { "Live" } }
            }
        }
        (lamp(tone))
        h2.scenario {
            "You hit snooze once."
            br;
            "Mornova says…"
        }
        (card_stack(deck))
        form.deck-controls action=(Screen::Home.path()) method="post" {
            @if deck.can_undo() {
                button #back type="submit" name="action" value="Back" { "← Back" }
            } @else {
                button #back type="submit" name="action" value="Back" disabled { "← Back" }
            }
            button #choose type="submit" name="action" value="Choose" {
                @if deck.selected().is_some() { "Selected!" } @else { "✓" }
            }
            button #next type="submit" name="action" value="Next" { "Next →" }
        }
        (forecast_panel(&mutable.panel, mutable.hours_until_wake))
        nav.links {
            a.link href=(Screen::Routine.path()) {
                div.link-title { "Routines" }
                div.link-hint { "Schedule wake & sleep times" }
            }
            a.link href=(Screen::Rules.path()) {
                div.link-title { "Rules" }
                div.link-hint { "Set gentle boundaries & nudges" }
            }
            a.cta href=(Screen::Preview.path()) {
                "Preview Tomorrow's Wake-Up"
            }
        }
    }
}

/// The tone Home speaks in: the deck's selection, else the personality's.
fn shown_tone(deck: &DeckState, personality_tone: Option<Tone>) -> Option<Tone> {
    deck.selected().or(personality_tone)
}

fn status_line(tone: Option<Tone>) -> String {
    match tone {
        Some(tone) => format!("I'm Your {tone} Mornova"),
        None => "Waiting for your vibe...".to_string(),
    }
}

fn card_stack(deck: &DeckState) -> Markup {
    html! {
        div.stack {
            @for (position, card) in deck.cards().enumerate() {
                div.card.front[position == 0].selected[deck.is_selected(card.tone)]
                    data-position=(position)
                    style=(format!("--accent: {}; --depth: {position}", card.tone.accent())) {
                    form action=(Screen::Home.path()) method="post" {
                        input type="hidden" name="position" value=(position);
                        button.card-face type="submit" name="action" value="Tap" {
                            div.orb { (card.icon) }
                            p.quote {
                                @for (i, line) in card.text.iter().enumerate() {
                                    @if i > 0 { br; }
                                    (line)
                                }
                            }
                            span.badge { (card.tone) }
                            @if position == 0 {
                                p.description { (card.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
enum Action {
    /// Undo the last advance or bring-to-front.
    Back,
    /// Choose (or un-choose) the front card.
    Choose,
    /// Send the front card to the back.
    Next,
    /// A click on the card at `position`.
    Tap,
    /// The end of a drag on the card at `position`, `offset` pixels from rest.
    Release,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    position: Option<usize>,
    offset: Option<f64>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    let mut mutable = state.mutable.lock().unwrap();
    apply(&mut mutable, form);
    Redirect::to(Screen::Home.path())
}

fn apply(mutable: &mut MutableState, form: FormData) {
    let MutableState {
        deck, personality, ..
    } = mutable;
    match form.action {
        Action::Back => {
            if !deck.undo() {
                log::debug!("Nothing to undo.");
            }
        }
        Action::Choose => {
            let tone = deck.front().tone;
            deck.choose(tone, personality);
        }
        Action::Next => deck.advance(),
        Action::Tap => match form.position {
            Some(position) => deck.tap(position, personality),
            None => log::error!("Tap without a card position."),
        },
        Action::Release => match (form.position, form.offset) {
            (Some(position), Some(offset)) => {
                let outcome = deck.release(position, offset, personality);
                log::debug!("Released card {position} at {offset}px: {outcome:?}");
            }
            _ => log::error!("Release without a card position and offset."),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::personality::Personality;

    fn form(action: Action, position: Option<usize>, offset: Option<f64>) -> FormData {
        FormData {
            action,
            position,
            offset,
        }
    }

    #[test]
    fn test_status_line() {
        let deck = DeckState::new(&Personality::new(None));
        assert_eq!(
            status_line(shown_tone(&deck, None)),
            "Waiting for your vibe..."
        );
        assert_eq!(
            status_line(shown_tone(&deck, Some(Tone::Calm))),
            "I'm Your Calm Mornova"
        );
        let deck = DeckState::new(&Personality::new(Some(Tone::Playful)));
        assert_eq!(
            status_line(shown_tone(&deck, Some(Tone::Calm))),
            "I'm Your Playful Mornova"
        );
    }

    #[test]
    fn test_lamp_follows_restored_selection() {
        let mut mutable = MutableState::new(Personality::new(None));
        mutable.deck.choose(Tone::Calm, &mut mutable.personality);
        apply(&mut mutable, form(Action::Next, None, None));
        mutable.deck.choose(Tone::Calm, &mut mutable.personality);
        assert_eq!(mutable.personality.tone, None);
        apply(&mut mutable, form(Action::Back, None, None));
        // Undo brings the selection back but not the personality.
        assert_eq!(mutable.deck.selected(), Some(Tone::Calm));
        assert_eq!(mutable.personality.tone, None);
        let html = home_body(&mutable).into_string();
        assert!(html.contains("Your Calm Mornova"));
        assert!(html.contains("class=\"lamp\" style=\"--accent: #C9C6FF\""));
    }

    #[test]
    fn test_actions() {
        let mut mutable = MutableState::new(Personality::default());
        apply(&mut mutable, form(Action::Next, None, None));
        assert_eq!(mutable.deck.order(), [1, 2, 3, 0]);
        apply(&mut mutable, form(Action::Choose, None, None));
        assert_eq!(mutable.personality.tone, Some(Tone::Direct));
        apply(&mut mutable, form(Action::Tap, Some(2), None));
        assert_eq!(mutable.deck.order(), [3, 0, 1, 2]);
        apply(&mut mutable, form(Action::Release, Some(0), Some(-120.0)));
        assert_eq!(mutable.deck.order(), [0, 1, 2, 3]);
        apply(&mut mutable, form(Action::Back, None, None));
        apply(&mut mutable, form(Action::Back, None, None));
        assert_eq!(mutable.deck.order(), [1, 2, 3, 0]);
    }

    #[test]
    fn test_incomplete_forms_are_ignored() {
        let mut mutable = MutableState::new(Personality::default());
        apply(&mut mutable, form(Action::Tap, None, None));
        apply(&mut mutable, form(Action::Release, Some(0), None));
        assert_eq!(mutable.deck.order(), [0, 1, 2, 3]);
        assert!(!mutable.deck.can_undo());
    }

    #[test]
    fn test_home_body_shows_front_description_only() {
        let mutable = MutableState::new(Personality::default());
        let html = home_body(&mutable).into_string();
        assert!(html.contains("Gentle wake-ups &amp; mindful reminders"));
        assert!(!html.contains("Clear boundaries &amp; firm nudges"));
        assert!(html.contains("No worries!<br>5 more minutes of peace"));
        assert!(html.contains("Selected!"));
        assert!(html.contains("class=\"lamp\""));
    }
}
