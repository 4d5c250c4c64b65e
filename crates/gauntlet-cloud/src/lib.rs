//! Cloud platform seam for the Gauntlet harness.
//!
//! Challenge injection ultimately talks to some cloud manager
//! (OpenStack, Kubernetes, AWS, ...). Gauntlet only depends on the
//! small [`CloudPlatform`] trait defined here; real provider SDKs sit
//! behind it and are out of scope for this repository. The bundled
//! [`InMemoryPlatform`] backs dry runs and tests.

mod error;
mod memory;
mod platform;
mod types;

pub use error::{CloudError, CloudResult};
pub use memory::InMemoryPlatform;
pub use platform::CloudPlatform;
pub use types::{Server, ServerId, ServerStatus};
