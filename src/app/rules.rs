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

use crate::app::screen::Screen;
use crate::app::state::MutableState;
use crate::app::state::ServerState;
use crate::app::template::lamp;
use crate::app::template::page_template;
use crate::app::template::screen_header;
use crate::types::personality::Personality;
use crate::types::rules::PRESET_RULES;
use crate::types::rules::Rules;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mut mutable = state.mutable.lock().unwrap();
    let flash = mutable.flash.take();
    let body = rules_body(&mutable.rules, &mutable.personality);
    let html = page_template(state.theme, flash, body);
    (StatusCode::OK, Html(html.into_string()))
}

fn rule_toggle(rule: &str, active: bool, custom: bool) -> Markup {
    html! {
        form action=(Screen::Rules.path()) method="post" {
            input type="hidden" name="rule" value=(rule);
            button.rule.active[active] type="submit" name="action" value="Toggle" {
                span { (rule) }
                @if custom {
                    span.badge { "Custom" }
                }
            }
        }
    }
}

fn rules_body(rules: &Rules, personality: &Personality) -> Markup {
    html! {
        (screen_header(Screen::Rules))
        (lamp(personality.tone))
        div.glass {
            h3 { "Preset Nudges" }
            @if rules.is_empty() {
                p.hint { "No rules active yet. Tap one to turn it on." }
            }
            @for rule in PRESET_RULES {
                (rule_toggle(rule, rules.is_active(rule), false))
            }
            @for rule in rules.custom() {
                (rule_toggle(rule, true, true))
            }
        }
        details.add-rule {
            summary { "+ Add Custom Rule" }
            form.glass action=(Screen::Rules.path()) method="post" {
                h3 { "Create Custom Rule" }
                p.hint {
                    "Add a personalized boundary or nudge to help Mornova support your routine."
                }
                label {
                    "Describe your custom rule or boundary"
                    textarea name="text" rows="3"
                        placeholder="e.g., Don't let me use social media after 10 PM on weekdays" {}
                }
                p.hint {
                    "Tip: Be specific about when and what you want Mornova to remind you about."
                }
                button.cta type="submit" name="action" value="Add" { "Add Rule" }
            }
        }
        a.cta href=(Screen::Home.path()) { "Save & Continue" }
    }
}

#[derive(Debug, Deserialize)]
enum Action {
    Toggle,
    Add,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    rule: Option<String>,
    text: Option<String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    let mut mutable = state.mutable.lock().unwrap();
    apply(&mut mutable, form);
    Redirect::to(Screen::Rules.path())
}

fn apply(mutable: &mut MutableState, form: FormData) {
    match form.action {
        Action::Toggle => match form.rule {
            Some(rule) => mutable.rules.toggle(&rule),
            None => log::error!("Toggle without a rule."),
        },
        Action::Add => {
            let text = form.text.unwrap_or_default();
            if mutable.rules.add_custom(&text) {
                mutable.flash = Some("Custom rule added successfully!".to_string());
            } else {
                log::debug!("Ignoring blank custom rule.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sets_flash() {
        let mut mutable = MutableState::new(Personality::default());
        apply(
            &mut mutable,
            FormData {
                action: Action::Add,
                rule: None,
                text: Some(" Lights off by midnight ".to_string()),
            },
        );
        assert!(mutable.rules.is_active("Lights off by midnight"));
        assert_eq!(
            mutable.flash.as_deref(),
            Some("Custom rule added successfully!")
        );
    }

    #[test]
    fn test_blank_add_is_ignored() {
        let mut mutable = MutableState::new(Personality::default());
        apply(
            &mut mutable,
            FormData {
                action: Action::Add,
                rule: None,
                text: Some("  ".to_string()),
            },
        );
        assert!(mutable.rules.is_empty());
        assert_eq!(mutable.flash, None);
    }

    #[test]
    fn test_custom_rules_are_badged() {
        let mut rules = Rules::new();
        rules.toggle(PRESET_RULES[2]);
        rules.add_custom("No coffee after 3 PM");
        let html = rules_body(&rules, &Personality::new(None)).into_string();
        assert!(html.contains("No coffee after 3 PM"));
        assert_eq!(html.matches("class=\"badge\"").count(), 1);
        assert_eq!(html.matches("rule active").count(), 2);
    }
}
