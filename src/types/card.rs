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

use crate::types::tone::Tone;

/// The number of cards in the personality deck.
pub const CARD_COUNT: usize = 4;

/// A lamp reaction shown on one card of the personality deck.
#[derive(Debug, PartialEq)]
pub struct PersonalityCard {
    /// What the lamp says when you hit snooze. One entry per line.
    pub text: &'static [&'static str],
    /// The light effect the lamp plays.
    pub effect: Effect,
    pub tone: Tone,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    Dim,
    Flash,
    Swirl,
    Brighten,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Dim => "dim",
            Effect::Flash => "flash",
            Effect::Swirl => "swirl",
            Effect::Brighten => "brighten",
        }
    }
}

pub static CATALOG: [PersonalityCard; CARD_COUNT] = [
    PersonalityCard {
        text: &["No worries!", "5 more minutes of peace"],
        effect: Effect::Dim,
        tone: Tone::Calm,
        icon: "🌙",
        description: "Gentle wake-ups & mindful reminders",
    },
    PersonalityCard {
        text: &["Okay, but this is the LAST one!"],
        effect: Effect::Flash,
        tone: Tone::Direct,
        icon: "⚡",
        description: "Clear boundaries & firm nudges",
    },
    PersonalityCard {
        text: &["Come on! Adventure is waiting!"],
        effect: Effect::Swirl,
        tone: Tone::Playful,
        icon: "🌀",
        description: "Fun energy & creative encouragement",
    },
    PersonalityCard {
        text: &["[Silent mode] Lamp just brightens gradually"],
        effect: Effect::Brighten,
        tone: Tone::Friendly,
        icon: "☀️",
        description: "Warm support & caring guidance",
    },
];

/// Finds the catalog entry for a tone.
pub fn card_for(tone: Tone) -> &'static PersonalityCard {
    match tone {
        Tone::Calm => &CATALOG[0],
        Tone::Direct => &CATALOG[1],
        Tone::Playful => &CATALOG[2],
        Tone::Friendly => &CATALOG[3],
    }
}
