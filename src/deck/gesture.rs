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

/// How far, in pixels, the front card must be dragged before a release
/// counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// What a drag on the front card does when released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeOutcome {
    /// Dragged right past the threshold.
    Choose,
    /// Dragged left past the threshold.
    Advance,
    /// Not dragged far enough: the card goes back to rest.
    Revert,
}

pub fn classify_release(offset_x: f64) -> SwipeOutcome {
    if offset_x > SWIPE_THRESHOLD {
        SwipeOutcome::Choose
    } else if offset_x < -SWIPE_THRESHOLD {
        SwipeOutcome::Advance
    } else {
        SwipeOutcome::Revert
    }
}
