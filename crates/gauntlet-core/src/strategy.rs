//! Named challenge and monitor strategies.
//!
//! Definitions reference behavior by strategy key; the registry maps
//! keys to handlers. A key with no handler is a configuration error
//! caught by [`crate::Inventory::validate`] before anything runs.
//!
//! Built-in keys:
//! - `noop` (action and monitor): log-only placeholder.
//! - `vm-suspend` (action): suspend the impacted cloud resource's
//!   server on start, resume it on stop.
//! - `server-recovery` (monitor): poll the impacted server until it
//!   reports ACTIVE again, within a configurable timeout.

use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::types::{ChallengeDefinition, TestDefinition};
use async_trait::async_trait;
use gauntlet_cloud::{CloudPlatform, ServerStatus};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Built-in log-only strategy key, valid for both kinds.
pub const NOOP: &str = "noop";
/// Built-in suspend/resume challenge action key.
pub const VM_SUSPEND: &str = "vm-suspend";
/// Built-in poll-until-active monitor key.
pub const SERVER_RECOVERY: &str = "server-recovery";

/// Everything a challenge action may consult.
pub struct ActionContext<'a> {
    pub platform: &'a dyn CloudPlatform,
    pub challenge: &'a ChallengeDefinition,
    pub inventory: &'a Inventory,
}

/// Everything a restoration monitor may consult.
pub struct MonitorContext<'a> {
    pub platform: &'a dyn CloudPlatform,
    pub test: &'a TestDefinition,
    pub inventory: &'a Inventory,
    /// Delay between restoration probes
    pub poll_interval: Duration,
    /// Overall restoration deadline
    pub timeout: Duration,
}

/// One failure-injection behavior. Exactly one `stop` exists for each
/// `start`; both belong to the same key.
#[async_trait]
pub trait ChallengeAction: Send + Sync {
    /// Inject the failure.
    async fn start(&self, cx: &ActionContext<'_>) -> CoreResult<()>;
    /// Restore normal operation.
    async fn stop(&self, cx: &ActionContext<'_>) -> CoreResult<()>;
}

/// Blocks until the service under test is observed restored.
#[async_trait]
pub trait RestorationMonitor: Send + Sync {
    async fn wait_for_restoration(&self, cx: &MonitorContext<'_>) -> CoreResult<()>;
}

struct NoopAction;

#[async_trait]
impl ChallengeAction for NoopAction {
    async fn start(&self, cx: &ActionContext<'_>) -> CoreResult<()> {
        info!(challenge = cx.challenge.id, "noop challenge start");
        Ok(())
    }

    async fn stop(&self, cx: &ActionContext<'_>) -> CoreResult<()> {
        info!(challenge = cx.challenge.id, "noop challenge stop");
        Ok(())
    }
}

struct NoopMonitor;

#[async_trait]
impl RestorationMonitor for NoopMonitor {
    async fn wait_for_restoration(&self, cx: &MonitorContext<'_>) -> CoreResult<()> {
        info!(test = cx.test.id, "noop monitor: restoration assumed immediately");
        Ok(())
    }
}

/// Suspend/resume the challenge's primary impacted cloud resource.
/// The resource name doubles as the server name on the platform.
struct VmSuspendAction;

impl VmSuspendAction {
    fn target_name(cx: &ActionContext<'_>) -> CoreResult<String> {
        cx.challenge
            .primary_cloud_resource(cx.inventory)
            .map(|resource| resource.name.clone())
            .ok_or_else(|| CoreError::UnusableDefinition {
                id: cx.challenge.id,
                reason: "no impacted cloud resource to suspend".into(),
            })
    }
}

#[async_trait]
impl ChallengeAction for VmSuspendAction {
    async fn start(&self, cx: &ActionContext<'_>) -> CoreResult<()> {
        let name = Self::target_name(cx)?;
        let server = cx.platform.find_server(&name).await?;
        info!(challenge = cx.challenge.id, server = %name, "suspending server");
        cx.platform.suspend_server(&server.id).await?;
        Ok(())
    }

    async fn stop(&self, cx: &ActionContext<'_>) -> CoreResult<()> {
        let name = Self::target_name(cx)?;
        let server = cx.platform.find_server(&name).await?;
        info!(challenge = cx.challenge.id, server = %name, "resuming server");
        cx.platform.resume_server(&server.id).await?;
        Ok(())
    }
}

/// Poll the challenged server until it reports ACTIVE again.
struct ServerRecoveryMonitor;

#[async_trait]
impl RestorationMonitor for ServerRecoveryMonitor {
    async fn wait_for_restoration(&self, cx: &MonitorContext<'_>) -> CoreResult<()> {
        let challenge = cx
            .inventory
            .require_challenge_definition(cx.test.challenge_def_id)?;
        let name = challenge
            .primary_cloud_resource(cx.inventory)
            .map(|resource| resource.name.clone())
            .ok_or_else(|| CoreError::UnusableDefinition {
                id: challenge.id,
                reason: "no impacted cloud resource to watch".into(),
            })?;
        let server = cx.platform.find_server(&name).await?;

        let deadline = Instant::now() + cx.timeout;
        loop {
            let status = cx.platform.server_status(&server.id).await?;
            debug!(server = %name, %status, "restoration probe");
            if status == ServerStatus::Active {
                info!(server = %name, "restoration detected");
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(CoreError::RestorationTimeout(cx.timeout));
            }
            tokio::time::sleep(cx.poll_interval).await;
        }
    }
}

/// Key → handler maps for both strategy kinds.
pub struct StrategyRegistry {
    actions: HashMap<String, Arc<dyn ChallengeAction>>,
    monitors: HashMap<String, Arc<dyn RestorationMonitor>>,
}

impl StrategyRegistry {
    /// Registry with no handlers at all.
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
            monitors: HashMap::new(),
        }
    }

    /// Registry with the built-in strategies registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register_action(NOOP, Arc::new(NoopAction));
        registry.register_action(VM_SUSPEND, Arc::new(VmSuspendAction));
        registry.register_monitor(NOOP, Arc::new(NoopMonitor));
        registry.register_monitor(SERVER_RECOVERY, Arc::new(ServerRecoveryMonitor));
        registry
    }

    pub fn register_action(&mut self, key: impl Into<String>, action: Arc<dyn ChallengeAction>) {
        self.actions.insert(key.into(), action);
    }

    pub fn register_monitor(&mut self, key: impl Into<String>, monitor: Arc<dyn RestorationMonitor>) {
        self.monitors.insert(key.into(), monitor);
    }

    /// Resolve a challenge action key.
    pub fn challenge_action(&self, key: &str) -> CoreResult<Arc<dyn ChallengeAction>> {
        self.actions
            .get(key)
            .cloned()
            .ok_or_else(|| CoreError::UnknownStrategy {
                kind: "challenge action",
                key: key.to_string(),
            })
    }

    /// Resolve a monitor key.
    pub fn monitor(&self, key: &str) -> CoreResult<Arc<dyn RestorationMonitor>> {
        self.monitors
            .get(key)
            .cloned()
            .ok_or_else(|| CoreError::UnknownStrategy {
                kind: "monitor",
                key: key.to_string(),
            })
    }

    /// Registered action keys, sorted (for diagnostics and the CLI).
    pub fn action_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Registered monitor keys, sorted.
    pub fn monitor_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.monitors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_registered() {
        let registry = StrategyRegistry::with_builtins();
        assert!(registry.challenge_action(NOOP).is_ok());
        assert!(registry.challenge_action(VM_SUSPEND).is_ok());
        assert!(registry.monitor(NOOP).is_ok());
        assert!(registry.monitor(SERVER_RECOVERY).is_ok());
    }

    #[test]
    fn unknown_keys_are_errors() {
        let registry = StrategyRegistry::with_builtins();
        assert!(matches!(
            registry.challenge_action("level-9000"),
            Err(CoreError::UnknownStrategy { kind: "challenge action", .. })
        ));
        assert!(matches!(
            registry.monitor("level-9000"),
            Err(CoreError::UnknownStrategy { kind: "monitor", .. })
        ));
    }

    #[test]
    fn keys_are_sorted_for_display() {
        let registry = StrategyRegistry::with_builtins();
        assert_eq!(registry.action_keys(), vec![NOOP, VM_SUSPEND]);
        assert_eq!(registry.monitor_keys(), vec![NOOP, SERVER_RECOVERY]);
    }
}
