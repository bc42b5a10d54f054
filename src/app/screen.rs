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

/// The screens of the app. Each one is served at its own path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Routine,
    Rules,
    Preview,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::Routine, Screen::Rules, Screen::Preview];

    pub fn path(&self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Routine => "/routine",
            Screen::Rules => "/rules",
            Screen::Preview => "/preview",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Mornova",
            Screen::Routine => "Routine Setup",
            Screen::Rules => "Rules Library",
            Screen::Preview => "Preview & Review",
        }
    }
}
