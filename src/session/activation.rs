//! Activation events over a tokio broadcast channel.
//!
//! A hotkey or menu action publishes an [`Activation`]; whoever owns the
//! session subscribes and resets it. The event carries no payload.

use tokio::sync::broadcast;

const DEFAULT_ACTIVATION_CAPACITY: usize = 16;

/// Request to start a fresh prompt-building run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Activation;

/// Fan-out channel for [`Activation`] events.
#[derive(Debug, Clone)]
pub struct ActivationBus {
    sender: broadcast::Sender<Activation>,
}

impl Default for ActivationBus {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_CAPACITY)
    }
}

impl ActivationBus {
    /// Creates a bus buffering up to `capacity` undelivered events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an activation (best effort).
    ///
    /// Returns the number of subscribers that will see it; zero is not an
    /// error.
    pub fn publish(&self) -> usize {
        match self.sender.send(Activation) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::debug!("Activation published with no subscribers");
                0
            },
        }
    }

    /// Subscribes to future activations.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Activation> {
        self.sender.subscribe()
    }
}

/// Calls `on_activation` for every event until all publishers are gone.
///
/// Lagged receivers skip the missed events and carry on: a reset applied
/// once has the same effect as applying it several times.
///
/// Returns the number of activations handled.
pub async fn run_activation_loop<F>(
    mut receiver: broadcast::Receiver<Activation>,
    mut on_activation: F,
) -> usize
where
    F: FnMut(),
{
    let mut handled = 0;
    loop {
        match receiver.recv().await {
            Ok(Activation) => {
                on_activation();
                handled += 1;
            },
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Activation receiver lagged");
                on_activation();
                handled += 1;
            },
            Err(broadcast::error::RecvError::Closed) => return handled,
        }
    }
}
