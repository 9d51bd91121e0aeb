use anyhow::Result;

#[async_trait::async_trait]
pub trait UiPort: Send + Sync {
    /// Surface the "ponto criado" confirmation to the user.
    async fn point_created(&self) -> Result<()>;
}
