use std::time::Duration;

/// How long the rejected-connect warning stays on screen.
pub const WARNING_TIMEOUT: Duration = Duration::from_secs(10);

/// A transient, dismissible user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// After this the notice disappears on its own.
    pub timeout: Duration,
}

impl Notice {
    /// The warning shown when a connect attempt is rejected.
    pub fn connect_rejected(essid: &str) -> Self {
        Self {
            message: format!(
                "Could not connect to \"{essid}\". Please check that the password \
                 is correct. If the problem persists, please contact the network \
                 administrator."
            ),
            timeout: WARNING_TIMEOUT,
        }
    }
}

/// Sink for user-facing warnings, injected into the portal.
pub trait Notifier {
    fn warn(&self, notice: Notice);
}

/// Callbacks to the host flow embedding the portal.
pub trait HostEvents {
    /// A connect attempt succeeded. Invoked exactly once; the portal is done
    /// after this.
    fn on_connected(&self, essid: &str);

    /// The access-point fallback was activated. Fired once per activation,
    /// regardless of whether the underlying call succeeded.
    fn on_access_point_started(&self);
}
