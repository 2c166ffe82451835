//! Delayed follow-up for the fade-out preset
//!
//! Triggering the fade-out slot starts a fade on the device. Once the fade
//! has had time to finish, the current sequence is stopped and the
//! follow-up slot (normally "On") is triggered.
//!
//! Each trigger spawns its own background task. Triggers arriving within
//! the delay window each fire their own follow-up; nothing is deduplicated
//! or cancelled, and the follow-up runs whether or not the caller is still
//! connected.

use crate::device::{DeviceClient, DeviceResult};
use fppcontrol_core::{ChainPolicy, DeviceCommand, FadeConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct FadeSequencer {
    device: Arc<DeviceClient>,
    fade_out_slot: String,
    follow_up_slot: String,
    delay: Duration,
}

impl FadeSequencer {
    pub fn new(device: Arc<DeviceClient>, config: &FadeConfig) -> Self {
        Self {
            device,
            fade_out_slot: config.fade_out_slot.to_string(),
            follow_up_slot: config.follow_up_slot.to_string(),
            delay: Duration::from_millis(config.delay_ms),
        }
    }

    /// Whether `slot` (already validated as digits) is the fade-out slot.
    ///
    /// Compared as text, so `"01"` is a plain preset trigger.
    pub fn is_fade_out_slot(&self, slot: &str) -> bool {
        slot == self.fade_out_slot
    }

    /// Trigger the fade-out slot and schedule the follow-up.
    ///
    /// Returns the result of the trigger itself. The follow-up is scheduled
    /// whenever the device answered, whatever the status; a transport
    /// failure schedules nothing.
    pub async fn fade_out(&self) -> DeviceResult {
        let result = self
            .device
            .execute(&DeviceCommand::TriggerPreset(self.fade_out_slot.clone()))
            .await;

        if result.is_ok() {
            self.schedule_follow_up();
        }
        result
    }

    /// Spawn the follow-up task: wait, stop the current sequence, trigger the follow-up slot.
    pub fn schedule_follow_up(&self) -> JoinHandle<()> {
        let device = self.device.clone();
        let delay = self.delay;
        let slot = self.follow_up_slot.clone();

        info!(
            "Scheduling stop and preset slot {} in {}ms",
            slot,
            delay.as_millis()
        );

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            info!("Sending stop and preset slot {}", slot);

            let steps = [
                DeviceCommand::StopCurrentSequence,
                DeviceCommand::TriggerPreset(slot),
            ];
            match device.execute_chain(&steps, ChainPolicy::BestEffort).await {
                Ok(outcome) if outcome.ok => {}
                Ok(outcome) => warn!(
                    "Fade follow-up ended with device status {}, ignoring",
                    outcome.status_code
                ),
                Err(e) => warn!("Fade follow-up failed, ignoring: {}", e),
            }
        })
    }
}
