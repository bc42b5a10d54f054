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

/// The personality the rest of the app sees. The deck mirrors its
/// selection into this.
#[derive(Clone, Debug, PartialEq)]
pub struct Personality {
    pub tone: Option<Tone>,
    pub traits: Vec<String>,
}

impl Personality {
    pub fn new(tone: Option<Tone>) -> Self {
        Self {
            tone,
            traits: Vec::new(),
        }
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self::new(Some(Tone::Friendly))
    }
}
