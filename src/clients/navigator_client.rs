use tokio::sync::mpsc;
use tracing::{instrument, warn};

use crate::messages::NavigationRequest;

/// Producer side of the navigation channel.
///
/// Views emit hard redirects through this handle; the application shell
/// holds the receiver and performs the actual page replace.
#[derive(Clone)]
pub struct NavigatorClient {
    sender: mpsc::Sender<NavigationRequest>,
}

impl NavigatorClient {
    pub fn channel(buffer_size: usize) -> (Self, mpsc::Receiver<NavigationRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { sender }, receiver)
    }

    /// Request a hard replace to `path`, fire-and-forget. Any view state is
    /// gone once the consumer acts on it.
    #[instrument(skip(self))]
    pub async fn replace(&self, path: impl Into<String> + std::fmt::Debug) {
        let request = NavigationRequest::Replace { path: path.into() };
        if self.sender.send(request).await.is_err() {
            warn!("Navigation consumer gone, redirect dropped");
        }
    }
}
