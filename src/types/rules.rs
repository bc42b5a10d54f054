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

/// The nudges offered out of the box.
pub const PRESET_RULES: [&str; 4] = [
    "Don't let me scroll TikTok before bed if I have an 8am class",
    "Remind me to wind down 30 minutes before sleep time",
    "Suggest putting phone away if it's past bedtime",
    "Encourage morning routine if wake time is early",
];

/// The active rules, in the order they were turned on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rules {
    active: Vec<String>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, rule: &str) -> bool {
        self.active.iter().any(|r| r == rule)
    }

    /// Turns a rule off if it is active, on otherwise.
    pub fn toggle(&mut self, rule: &str) {
        if self.is_active(rule) {
            self.active.retain(|r| r != rule);
        } else {
            self.active.push(rule.to_string());
        }
    }

    /// Adds a user-written rule. Returns false if the text is blank.
    pub fn add_custom(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.active.push(text.to_string());
        true
    }

    /// Active rules that are not presets.
    pub fn custom(&self) -> impl Iterator<Item = &str> {
        self.active
            .iter()
            .map(|r| r.as_str())
            .filter(|r| !PRESET_RULES.contains(r))
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
