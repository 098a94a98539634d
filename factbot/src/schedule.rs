//! Daily broadcast scheduling.
//!
//! One recurring job at a fixed local time of day. Missed fires while the
//! process is down are simply skipped; there is no catch-up backlog.

use crate::bot::SharedGenerator;
use crate::delivery;
use chrono::{DateTime, Local, LocalResult, TimeZone};
use teloxide::prelude::*;
use teloxide::types::ChatId;

/// Hour of day (local time) for the scheduled broadcast.
const BROADCAST_HOUR: u32 = 1;

/// Minute for the scheduled broadcast.
const BROADCAST_MINUTE: u32 = 0;

/// Run the daily broadcast loop forever.
pub async fn run_daily_broadcast(bot: Bot, generator: SharedGenerator, chats: Vec<ChatId>) {
    loop {
        let now = Local::now();
        let next = next_occurrence(now, BROADCAST_HOUR, BROADCAST_MINUTE);
        tracing::info!("next daily fact scheduled for {next}");

        let wait = (next - Local::now()).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;

        tracing::info!("daily fact broadcast triggered");
        broadcast_once(&bot, &generator, &chats).await;
    }
}

/// Generate one fact and deliver it (or the fallback) to every chat.
async fn broadcast_once(bot: &Bot, generator: &SharedGenerator, chats: &[ChatId]) {
    let outcome = match generator.lock().await.generate_unique_fact().await {
        Ok(outcome) => outcome,
        Err(err) => {
            // A storage fault aborts this run; the loop stays alive.
            tracing::error!("daily broadcast aborted, fact store failure: {err}");
            return;
        }
    };

    if let Err(err) = delivery::deliver_broadcast(bot, chats, &outcome).await {
        tracing::error!("daily broadcast delivery failed: {err}");
    }
}

/// Next wall-clock occurrence of `hour:minute` strictly after `after`.
///
/// Local times that do not exist (DST gaps) are skipped to the next day;
/// for ambiguous times the earlier instant wins.
fn next_occurrence<Tz: TimeZone>(after: DateTime<Tz>, hour: u32, minute: u32) -> DateTime<Tz> {
    let tz = after.timezone();
    let mut date = after.date_naive();

    loop {
        let naive = date
            .and_hms_opt(hour, minute, 0)
            .expect("valid wall-clock time");

        match tz.from_local_datetime(&naive) {
            LocalResult::Single(candidate) | LocalResult::Ambiguous(candidate, _)
                if candidate > after =>
            {
                return candidate;
            }
            _ => {}
        }

        date = date.succ_opt().expect("date within calendar range");
    }
}
