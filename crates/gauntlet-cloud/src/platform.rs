use crate::{CloudResult, Server, ServerId, ServerStatus};
use async_trait::async_trait;

/// Abstraction over a cloud manager's compute API.
///
/// Implementations wrap a real provider SDK (or, for tests and dry
/// runs, an in-process fake). The harness only needs the handful of
/// operations a challenge or monitor strategy can invoke: enumerate
/// servers, suspend/resume one, and observe its status.
#[async_trait]
pub trait CloudPlatform: Send + Sync {
    /// List all servers visible to the platform connection.
    async fn list_servers(&self) -> CloudResult<Vec<Server>>;

    /// Find a server by name.
    async fn find_server(&self, name: &str) -> CloudResult<Server>;

    /// Suspend a server (state saved to disk, status becomes SUSPENDED).
    async fn suspend_server(&self, id: &ServerId) -> CloudResult<()>;

    /// Resume a suspended server (status becomes ACTIVE).
    async fn resume_server(&self, id: &ServerId) -> CloudResult<()>;

    /// Fetch the current status of a server.
    async fn server_status(&self, id: &ServerId) -> CloudResult<ServerStatus>;
}
