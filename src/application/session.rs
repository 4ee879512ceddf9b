// Session control - Fire-and-forget logout
use crate::application::status_repository::StatusRepository;
use std::sync::Arc;

/// Ask the device to end the session. The caller reloads the dashboard
/// whether or not the request went through; a failed logout only means the
/// device-side session lingers, and there is nothing useful to do about
/// that here beyond logging it.
pub async fn logout(repository: &Arc<dyn StatusRepository>) {
    if let Err(e) = repository.logout().await {
        tracing::warn!("logout request failed: {e:#}");
    }
}
