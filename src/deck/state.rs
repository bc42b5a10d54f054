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

use std::collections::VecDeque;

use crate::deck::gesture::SwipeOutcome;
use crate::deck::gesture::classify_release;
use crate::types::card::CARD_COUNT;
use crate::types::card::CATALOG;
use crate::types::card::PersonalityCard;
use crate::types::personality::Personality;
use crate::types::tone::Tone;

/// How many undo steps are kept. Older steps are forgotten.
pub const HISTORY_LIMIT: usize = 100;

/// The deepest stack position a tap can bring to the front.
const MAX_TAPPABLE_POSITION: usize = 2;

/// The personality deck: the order the cards are stacked in, which tone is
/// selected, and the undo history.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckState {
    /// Catalog indices, front card first. Always a permutation of
    /// `0..CARD_COUNT`.
    order: [usize; CARD_COUNT],
    selected: Option<Tone>,
    /// Oldest first.
    history: VecDeque<Snapshot>,
}

#[derive(Clone, Debug, PartialEq)]
struct Snapshot {
    order: [usize; CARD_COUNT],
    selected: Option<Tone>,
}

impl DeckState {
    /// A fresh deck, with the personality's current tone selected.
    pub fn new(personality: &Personality) -> Self {
        Self {
            order: [0, 1, 2, 3],
            selected: personality.tone,
            history: VecDeque::new(),
        }
    }

    pub fn order(&self) -> [usize; CARD_COUNT] {
        self.order
    }

    pub fn selected(&self) -> Option<Tone> {
        self.selected
    }

    pub fn is_selected(&self, tone: Tone) -> bool {
        self.selected == Some(tone)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn front(&self) -> &'static PersonalityCard {
        &CATALOG[self.order[0]]
    }

    /// The cards in stack order, front first.
    pub fn cards(&self) -> impl Iterator<Item = &'static PersonalityCard> + '_ {
        self.order.iter().map(|&i| &CATALOG[i])
    }

    /// Sends the front card to the back.
    pub fn advance(&mut self) {
        self.push_history();
        self.order.rotate_left(1);
    }

    /// Brings the card with the given catalog index to the front, keeping
    /// the cyclic order of the rest. Only the cards right behind the front
    /// one can be brought forward; otherwise nothing happens and this
    /// returns false.
    pub fn bring_to_front(&mut self, catalog_index: usize) -> bool {
        let Some(position) = self.order.iter().position(|&i| i == catalog_index) else {
            return false;
        };
        if position == 0 || position > MAX_TAPPABLE_POSITION {
            return false;
        }
        self.push_history();
        self.order.rotate_left(position);
        true
    }

    /// Selects a tone, or clears the selection if it is already selected.
    /// The personality follows the selection.
    pub fn choose(&mut self, tone: Tone, personality: &mut Personality) {
        if self.selected == Some(tone) {
            self.selected = None;
            personality.tone = None;
        } else {
            self.selected = Some(tone);
            personality.tone = Some(tone);
        }
        personality.traits.clear();
    }

    /// Restores the order and selection from before the last advance or
    /// bring-to-front. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(snapshot) => {
                self.order = snapshot.order;
                self.selected = snapshot.selected;
                true
            }
            None => false,
        }
    }

    /// Handles a tap on the card at a stack position: the front card is
    /// chosen, the two behind it are brought forward, and deeper cards
    /// ignore taps.
    pub fn tap(&mut self, position: usize, personality: &mut Personality) {
        match position {
            0 => self.choose(self.front().tone, personality),
            p if p <= MAX_TAPPABLE_POSITION => {
                let catalog_index = self.order[p];
                self.bring_to_front(catalog_index);
            }
            _ => {}
        }
    }

    /// Handles the end of a horizontal drag. Only the front card can be
    /// dragged.
    pub fn release(
        &mut self,
        position: usize,
        offset_x: f64,
        personality: &mut Personality,
    ) -> SwipeOutcome {
        if position != 0 {
            return SwipeOutcome::Revert;
        }
        let outcome = classify_release(offset_x);
        match outcome {
            SwipeOutcome::Choose => self.choose(self.front().tone, personality),
            SwipeOutcome::Advance => self.advance(),
            SwipeOutcome::Revert => {}
        }
        outcome
    }

    fn push_history(&mut self) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(Snapshot {
            order: self.order,
            selected: self.selected,
        });
    }
}
