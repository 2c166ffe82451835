//! Device access: command execution against the FPP HTTP API
//!
//! [`DeviceClient`] combines the [`CommandTranslator`] with a
//! [`DeviceTransport`] and performs exactly one outbound call per command.
//! Multi-step actions go through [`DeviceClient::execute_chain`] with an
//! explicit [`ChainPolicy`].

mod transport;

pub(crate) use transport::HttpTransport;

use async_trait::async_trait;
use fppcontrol_core::{
    ChainPolicy, CommandTranslator, DeviceCommand, DeviceError, DeviceRequest, ProxyOutcome,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of one device call.
pub(crate) type DeviceResult = std::result::Result<ProxyOutcome, DeviceError>;

/// Transport abstraction for device communication.
///
/// Allows mocking the device in tests without a network.
#[async_trait]
pub(crate) trait DeviceTransport: Send + Sync {
    /// Perform the request and read the whole body as text.
    ///
    /// Non-2xx statuses are returned as an outcome, not as an error.
    async fn send(&self, request: &DeviceRequest) -> DeviceResult;
}

/// Executes device commands.
pub(crate) struct DeviceClient {
    translator: CommandTranslator,
    transport: Arc<dyn DeviceTransport>,
}

impl DeviceClient {
    pub fn new(translator: CommandTranslator, transport: Arc<dyn DeviceTransport>) -> Self {
        Self {
            translator,
            transport,
        }
    }

    /// Translate and send a single command.
    pub async fn execute(&self, command: &DeviceCommand) -> DeviceResult {
        let request = self.translator.translate(command);
        info!("Proxying {} to {}", command, request.url);

        let result = self.transport.send(&request).await;
        match &result {
            Ok(outcome) if outcome.ok => {
                debug!("Device answered {} for {}", outcome.status_code, command)
            }
            Ok(outcome) => warn!(
                "Device answered {} for {}: {}",
                outcome.status_code, command, outcome.body_text
            ),
            Err(e) => warn!("Device call for {} failed: {}", command, e),
        }
        result
    }

    /// Run `commands` one after another, each finishing before the next starts.
    ///
    /// Returns the result of the last step attempted.
    pub async fn execute_chain(
        &self,
        commands: &[DeviceCommand],
        policy: ChainPolicy,
    ) -> DeviceResult {
        let Some((last, leading)) = commands.split_last() else {
            return Err(DeviceError::other("empty command chain"));
        };

        for command in leading {
            match self.execute(command).await {
                Ok(outcome) if outcome.ok => {}
                result => match policy {
                    ChainPolicy::BestEffort => {
                        debug!("Continuing after failed step: {}", command);
                    }
                    ChainPolicy::FailFast => return result,
                },
            }
        }

        self.execute(last).await
    }
}
