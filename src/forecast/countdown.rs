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

use std::time::Duration;

use chrono::Days;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::TimeDelta;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::forecast::resolve::WAKE_HOUR;
use crate::types::timestamp::Timestamp;

/// How often the wake-up countdown is recomputed.
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(15 * 60);

/// Whole hours from `now` until the next wake-up: today's if it has not
/// happened yet, tomorrow's otherwise.
pub fn hours_until_next_wake(now: NaiveDateTime) -> i64 {
    let wake = NaiveTime::MIN + TimeDelta::hours(WAKE_HOUR as i64);
    let today = now.date();
    let day = if now.time() < wake {
        today
    } else {
        today.checked_add_days(Days::new(1)).unwrap_or(today)
    };
    (day.and_time(wake) - now).num_hours()
}

pub fn hours_label(hours: i64) -> String {
    if hours == 1 {
        "(in 1 hour)".to_string()
    } else {
        format!("(in {hours} hours)")
    }
}

/// A background task recomputing the countdown on a fixed period. The first
/// tick fires immediately. Dropping the handle stops the task.
pub struct Countdown {
    cancel: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Countdown {
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(i64) + Send + 'static,
    {
        let (cancel, mut cancelled) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let hours = hours_until_next_wake(Timestamp::now().local_naive());
                        log::debug!("Wake-up in {hours}h");
                        on_tick(hours);
                    }
                    _ = &mut cancelled => {
                        log::debug!("Countdown stopped.");
                        break;
                    }
                }
            }
        });
        Self { cancel, handle }
    }

    /// Stops the task and waits for it to finish.
    pub async fn cancel(self) {
        let _ = self.cancel.send(());
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_just_before_wake() {
        assert_eq!(hours_until_next_wake(at(2024, 5, 1, 6, 59)), 0);
    }

    #[test]
    fn test_just_after_wake() {
        assert_eq!(hours_until_next_wake(at(2024, 5, 1, 7, 1)), 23);
    }

    #[test]
    fn test_at_wake() {
        assert_eq!(hours_until_next_wake(at(2024, 5, 1, 7, 0)), 24);
    }

    #[test]
    fn test_evening() {
        assert_eq!(hours_until_next_wake(at(2024, 5, 1, 22, 30)), 8);
        assert_eq!(hours_until_next_wake(at(2024, 12, 31, 23, 0)), 8);
    }

    #[test]
    fn test_after_midnight() {
        assert_eq!(hours_until_next_wake(at(2024, 5, 2, 0, 15)), 6);
    }

    #[test]
    fn test_hours_label() {
        assert_eq!(hours_label(1), "(in 1 hour)");
        assert_eq!(hours_label(0), "(in 0 hours)");
        assert_eq!(hours_label(9), "(in 9 hours)");
    }

    #[tokio::test]
    async fn test_ticks_until_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let countdown = Countdown::spawn(Duration::from_millis(5), move |hours| {
            let _ = tx.send(hours);
        });
        for _ in 0..3 {
            let hours = rx.recv().await.unwrap();
            assert!((0..=24).contains(&hours));
        }
        countdown.cancel().await;
        // The task owned the sender; once it is gone, the channel drains.
        while rx.recv().await.is_some() {}
    }

    #[tokio::test]
    async fn test_drop_stops_the_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let countdown = Countdown::spawn(Duration::from_secs(3600), move |hours| {
            let _ = tx.send(hours);
        });
        assert!(rx.recv().await.is_some());
        drop(countdown);
        let closed = timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        assert_eq!(closed, None);
    }
}
