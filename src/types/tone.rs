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

use std::fmt::Display;
use std::fmt::Formatter;

/// The lamp's personality.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Calm,
    Direct,
    Playful,
    Friendly,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Calm => "Calm",
            Tone::Direct => "Direct",
            Tone::Playful => "Playful",
            Tone::Friendly => "Friendly",
        }
    }

    /// The colour of the lamp's glow for this personality.
    pub fn accent(&self) -> &'static str {
        match self {
            Tone::Friendly => "#FFB27A",
            Tone::Calm => "#C9C6FF",
            Tone::Playful => "#FF9AD5",
            Tone::Direct => "#8FF4E7",
        }
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
