//! Alert dispatcher for changed C&C threads.
//!
//! Maps every changed thread to the channels subscribed to its tier and generation,
//! applies the per-channel QC cooldown and sends one message per channel.
//!
//! The dispatcher is organized into separate modules by concern:
//! - `message` - Alert classification and message content
//! - `sender` - The `AlertSender` seam and its Discord implementation
//! - `cooldown` - In-memory cooldown mirror

pub mod cooldown;
pub mod message;
pub mod sender;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    data::cc_cooldown::CcCooldownRepository,
    error::{handler::log_error, AppError},
    model::{
        cc_status::TrackedStatus, cc_subscription::AlertSubscription,
        forum_thread::ParsedThreadData, stage::Stage,
    },
};

use self::{
    cooldown::CooldownCache,
    message::{build_content, AlertKind},
    sender::AlertSender,
};

/// Most threads that may become ready for QC in one cycle before alerts are dropped.
pub const MASS_UPDATE_LIMIT: usize = 5;

/// Outcome counts of a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub sent: usize,
    pub skipped_cooldown: usize,
    pub failed: usize,
}

pub struct CcAlertService<'a> {
    db: &'a DatabaseConnection,
    sender: &'a dyn AlertSender,
    cooldowns: &'a CooldownCache,
    forum_base_url: &'a str,
}

impl<'a> CcAlertService<'a> {
    /// Creates a new CcAlertService.
    ///
    /// # Arguments
    /// - `db` - Bot database connection for persisting cooldowns
    /// - `sender` - Alert delivery
    /// - `cooldowns` - Shared cooldown mirror
    /// - `forum_base_url` - Forum root used to build thread links
    pub fn new(
        db: &'a DatabaseConnection,
        sender: &'a dyn AlertSender,
        cooldowns: &'a CooldownCache,
        forum_base_url: &'a str,
    ) -> Self {
        Self {
            db,
            sender,
            cooldowns,
            forum_base_url,
        }
    }

    /// Sends alerts for a cycle's changed threads.
    ///
    /// Channels are processed sequentially. A failed send is logged and counted and
    /// does not stop the remaining channels or threads.
    ///
    /// # Arguments
    /// - `changed` - Changed threads from the diff
    /// - `previous` - Cached states before this cycle, keyed by thread id
    /// - `subscriptions` - Every alert subscription
    /// - `now` - Time used for cooldown checks and records
    ///
    /// # Returns
    /// - `Ok(DispatchSummary)` - Counts of sent, cooled-down and failed alerts
    /// - `Err(AppError::MassUpdate)` - More than `MASS_UPDATE_LIMIT` threads became
    ///   ready for QC; nothing was sent
    /// - `Err(AppError::DbErr)` - A cooldown could not be persisted
    pub async fn dispatch(
        &self,
        changed: &[ParsedThreadData],
        previous: &HashMap<i64, TrackedStatus>,
        subscriptions: &[AlertSubscription],
        now: DateTime<Utc>,
    ) -> Result<DispatchSummary, AppError> {
        let ready_for_qc = changed.iter().filter(|t| t.is_ready_for_qc()).count();
        if ready_for_qc > MASS_UPDATE_LIMIT {
            return Err(AppError::MassUpdate {
                count: ready_for_qc,
            });
        }

        let mut summary = DispatchSummary::default();
        for thread in changed {
            self.dispatch_thread(
                thread,
                previous.get(&thread.thread_id),
                subscriptions,
                now,
                &mut summary,
            )
            .await?;
        }

        Ok(summary)
    }

    async fn dispatch_thread(
        &self,
        thread: &ParsedThreadData,
        previous: Option<&TrackedStatus>,
        subscriptions: &[AlertSubscription],
        now: DateTime<Utc>,
        summary: &mut DispatchSummary,
    ) -> Result<(), AppError> {
        let Some(kind) = AlertKind::classify(thread, previous) else {
            return Ok(());
        };
        let Some(tier) = alert_tier(thread) else {
            tracing::debug!("Skipping alert for thread {}: ambiguous tier", thread.thread_id);
            return Ok(());
        };
        let [gen] = thread.gen.as_slice() else {
            tracing::debug!(
                "Skipping alert for thread {}: {} generations resolved",
                thread.thread_id,
                thread.gen.len()
            );
            return Ok(());
        };

        let matching: Vec<&AlertSubscription> = subscriptions
            .iter()
            .filter(|sub| sub.matches(tier, gen))
            .collect();
        let identifier = cooldown::identifier(gen, tier);
        let cooldown_applies = thread.stage == Stage::Qc;

        for (channel_id, rows) in group_by_channel(&matching) {
            let Some(governing) = governing_row(&rows, thread.stage) else {
                continue;
            };

            if cooldown_applies
                && self
                    .cooldowns
                    .is_cooling_down(channel_id, &identifier, governing.cooldown, now)
                    .await
            {
                tracing::debug!(
                    "Channel {} is cooling down for {}, skipping thread {}",
                    channel_id,
                    identifier,
                    thread.thread_id
                );
                summary.skipped_cooldown += 1;
                continue;
            }

            let role = role_row(&rows, thread.stage)
                .and_then(|row| row.role)
                .filter(|_| kind.pings());
            let content = build_content(kind, thread, role, self.forum_base_url);

            if let Err(e) = self.sender.send_alert(channel_id, &content).await {
                log_error(
                    &format!("Failed to send C&C alert to channel {}", channel_id),
                    &e,
                );
                summary.failed += 1;
                continue;
            }

            tracing::info!(
                "Sent {:?} alert for thread {} to channel {}",
                kind,
                thread.thread_id,
                channel_id
            );
            summary.sent += 1;

            if cooldown_applies && governing.cooldown > 0 {
                CcCooldownRepository::new(self.db)
                    .upsert(channel_id, &identifier, now)
                    .await?;
                self.cooldowns.record(channel_id, &identifier, now).await;
            }
        }

        Ok(())
    }
}

/// Tier used to match subscriptions, or `None` when it cannot be determined.
///
/// A thread from a multi-tier subforum uses its prefix label as the tier.
fn alert_tier(thread: &ParsedThreadData) -> Option<&str> {
    match thread.tier.as_slice() {
        [tier] => Some(tier.as_str()),
        [_, _, ..] => thread.phrase_text.as_deref().map(str::trim),
        [] => None,
    }
}

/// Groups subscription rows by channel, keeping first-seen channel order.
fn group_by_channel<'s>(
    subscriptions: &[&'s AlertSubscription],
) -> Vec<(u64, Vec<&'s AlertSubscription>)> {
    let mut groups: Vec<(u64, Vec<&'s AlertSubscription>)> = Vec::new();
    for &sub in subscriptions {
        match groups.iter().position(|(channel, _)| *channel == sub.channel_id) {
            Some(index) => groups[index].1.push(sub),
            None => groups.push((sub.channel_id, vec![sub])),
        }
    }
    groups
}

/// Row whose role is mentioned: an exact stage match, else an "all" row.
///
/// A channel without either still gets the alert, just without a mention.
fn role_row<'s>(rows: &[&'s AlertSubscription], stage: Stage) -> Option<&'s AlertSubscription> {
    rows.iter()
        .find(|row| row.targets_stage(stage))
        .or_else(|| rows.iter().find(|row| row.targets_any_stage()))
        .copied()
}

/// Row whose cooldown applies to a channel: the role row, else the first row.
fn governing_row<'s>(
    rows: &[&'s AlertSubscription],
    stage: Stage,
) -> Option<&'s AlertSubscription> {
    role_row(rows, stage).or_else(|| rows.first().copied())
}
