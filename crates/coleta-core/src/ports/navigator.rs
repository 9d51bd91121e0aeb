//! Navigator port - abstracts screen routing

use anyhow::Result;
use async_trait::async_trait;

/// One-way navigation signal, fired only after a successful submission.
#[async_trait]
pub trait NavigatorPort: Send + Sync {
    async fn return_to_landing(&self) -> Result<()>;
}
