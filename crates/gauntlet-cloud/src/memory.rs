use crate::{CloudError, CloudPlatform, CloudResult, Server, ServerId, ServerStatus};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

struct ServerState {
    server: Server,
    suspended_at: Option<Instant>,
}

/// In-process [`CloudPlatform`] used for dry runs and tests.
///
/// Servers live in a map guarded by a mutex. With
/// [`InMemoryPlatform::with_auto_recovery`], a suspended server flips
/// back to ACTIVE on its own after the given delay, standing in for an
/// orchestrator restoring the workload behind the harness's back.
pub struct InMemoryPlatform {
    servers: Mutex<HashMap<ServerId, ServerState>>,
    auto_recovery: Option<Duration>,
}

impl InMemoryPlatform {
    /// Create an empty platform.
    pub fn new() -> Self {
        Self {
            servers: Mutex::new(HashMap::new()),
            auto_recovery: None,
        }
    }

    /// Suspended servers return to ACTIVE after `delay`.
    pub fn with_auto_recovery(mut self, delay: Duration) -> Self {
        self.auto_recovery = Some(delay);
        self
    }

    /// Register a server, ACTIVE by default.
    pub fn add_server(&self, id: impl Into<ServerId>, name: impl Into<String>) {
        let id = id.into();
        let server = Server {
            id: id.clone(),
            name: name.into(),
            status: ServerStatus::Active,
        };
        let mut servers = self.guard();
        servers.insert(
            id,
            ServerState {
                server,
                suspended_at: None,
            },
        );
    }

    /// A poisoned lock only means another thread panicked mid-call;
    /// the map itself stays consistent, so keep using it.
    fn guard(&self) -> MutexGuard<'_, HashMap<ServerId, ServerState>> {
        self.servers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_auto_recovery(&self, state: &mut ServerState) {
        if let (Some(delay), Some(at)) = (self.auto_recovery, state.suspended_at) {
            if state.server.status == ServerStatus::Suspended && at.elapsed() >= delay {
                debug!(server = %state.server.name, "auto-recovery elapsed, server active again");
                state.server.status = ServerStatus::Active;
                state.suspended_at = None;
            }
        }
    }
}

impl Default for InMemoryPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CloudPlatform for InMemoryPlatform {
    async fn list_servers(&self) -> CloudResult<Vec<Server>> {
        let mut servers = self.guard();
        let mut out: Vec<Server> = servers
            .values_mut()
            .map(|state| {
                self.apply_auto_recovery(state);
                state.server.clone()
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    async fn find_server(&self, name: &str) -> CloudResult<Server> {
        let mut servers = self.guard();
        servers
            .values_mut()
            .find(|state| state.server.name == name)
            .map(|state| {
                self.apply_auto_recovery(state);
                state.server.clone()
            })
            .ok_or_else(|| CloudError::ServerNotFound(name.to_string()))
    }

    async fn suspend_server(&self, id: &ServerId) -> CloudResult<()> {
        let mut servers = self.guard();
        let state = servers
            .get_mut(id)
            .ok_or_else(|| CloudError::ServerNotFound(id.clone()))?;
        if state.server.status != ServerStatus::Active {
            return Err(CloudError::InvalidState {
                operation: "suspend",
                status: state.server.status.to_string(),
            });
        }
        debug!(server = %state.server.name, "suspending server");
        state.server.status = ServerStatus::Suspended;
        state.suspended_at = Some(Instant::now());
        Ok(())
    }

    async fn resume_server(&self, id: &ServerId) -> CloudResult<()> {
        let mut servers = self.guard();
        let state = servers
            .get_mut(id)
            .ok_or_else(|| CloudError::ServerNotFound(id.clone()))?;
        // resume on an already-active server is a no-op: the workload
        // may have been restored by the orchestrator before we got here
        if state.server.status == ServerStatus::Suspended {
            debug!(server = %state.server.name, "resuming server");
            state.server.status = ServerStatus::Active;
            state.suspended_at = None;
        }
        Ok(())
    }

    async fn server_status(&self, id: &ServerId) -> CloudResult<ServerStatus> {
        let mut servers = self.guard();
        let state = servers
            .get_mut(id)
            .ok_or_else(|| CloudError::ServerNotFound(id.clone()))?;
        self.apply_auto_recovery(state);
        Ok(state.server.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn suspend_and_resume_round_trip() {
        let platform = InMemoryPlatform::new();
        platform.add_server("vm-1", "nova-compute-1");

        let server = platform.find_server("nova-compute-1").await.unwrap();
        assert_eq!(server.status, ServerStatus::Active);

        platform.suspend_server(&server.id).await.unwrap();
        assert_eq!(
            platform.server_status(&server.id).await.unwrap(),
            ServerStatus::Suspended
        );

        platform.resume_server(&server.id).await.unwrap();
        assert_eq!(
            platform.server_status(&server.id).await.unwrap(),
            ServerStatus::Active
        );
    }

    #[tokio::test]
    async fn suspend_requires_active_server() {
        let platform = InMemoryPlatform::new();
        platform.add_server("vm-1", "nova-compute-1");
        platform.suspend_server(&"vm-1".to_string()).await.unwrap();

        let err = platform
            .suspend_server(&"vm-1".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::InvalidState { .. }));
    }

    #[tokio::test]
    async fn operations_survive_a_poisoned_lock() {
        let platform = std::sync::Arc::new(InMemoryPlatform::new());
        platform.add_server("vm-1", "nova-compute-1");

        let poisoner = std::sync::Arc::clone(&platform);
        let handle = std::thread::spawn(move || {
            let _guard = poisoner.guard();
            panic!("poison the server map");
        });
        assert!(handle.join().is_err());

        let server = platform.find_server("nova-compute-1").await.unwrap();
        assert_eq!(server.status, ServerStatus::Active);
    }

    #[tokio::test]
    async fn unknown_server_is_reported() {
        let platform = InMemoryPlatform::new();
        let err = platform.find_server("missing").await.unwrap_err();
        assert!(matches!(err, CloudError::ServerNotFound(_)));
    }

    #[tokio::test]
    async fn auto_recovery_restores_suspended_server() {
        let platform =
            InMemoryPlatform::new().with_auto_recovery(Duration::from_millis(0));
        platform.add_server("vm-1", "nova-compute-1");
        platform.suspend_server(&"vm-1".to_string()).await.unwrap();

        assert_eq!(
            platform.server_status(&"vm-1".to_string()).await.unwrap(),
            ServerStatus::Active
        );
    }
}
