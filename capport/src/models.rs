use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A wireless network as reported by one scan.
///
/// Produced only by [`NetworkService::scan_networks`](crate::NetworkService::scan_networks);
/// each scan supersedes the previous list wholesale, there is no incremental
/// merge. Duplicate essids in a single scan result are passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Human-readable network name.
    pub essid: String,
    /// Whether joining requires a password.
    pub protected: bool,
}

impl Network {
    pub fn open(essid: impl Into<String>) -> Self {
        Self {
            essid: essid.into(),
            protected: false,
        }
    }

    pub fn protected(essid: impl Into<String>) -> Self {
        Self {
            essid: essid.into(),
            protected: true,
        }
    }
}

/// Result of a completed connect call.
///
/// `Rejected` is a structured outcome (bad credentials, network refused the
/// attempt), distinct from the call itself failing with [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Accepted,
    Rejected,
}

/// Lifecycle of the scanned network list.
///
/// Owned exclusively by the orchestrator and mutated only when a scan
/// completes (or is issued).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// No scan issued yet, or the list was cleared for a connect attempt.
    Idle,
    /// A scan is outstanding.
    Loading,
    /// The most recent scan completed with this list, in received order.
    Loaded(Vec<Network>),
    /// The most recent scan or connect call itself failed.
    Failed,
}

impl Display for ScanState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Loaded(nets) => write!(f, "loaded ({} networks)", nets.len()),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Lifecycle of a connect attempt.
///
/// `Connecting` blocks all user interaction; `Succeeded` is terminal for the
/// portal (the host takes over once notified).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectState {
    NotConnecting,
    Connecting,
    /// Connected to the named network. Terminal.
    Succeeded(String),
    /// The connect call itself failed (service unreachable, not rejected
    /// credentials). A new attempt or refresh is still allowed.
    Failed,
}

impl Display for ConnectState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConnecting => write!(f, "not connecting"),
            Self::Connecting => write!(f, "connecting"),
            Self::Succeeded(essid) => write!(f, "connected to {essid}"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Errors crossing the service boundary.
///
/// The portal treats every variant the same way (the call failed, as opposed
/// to completing with [`ConnectOutcome::Rejected`]); the variants exist so a
/// service implementation can report what actually went wrong.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service could not be reached at all.
    #[error("network service unreachable: {0}")]
    Unreachable(String),

    /// The service answered but could not carry out the request.
    #[error("request failed: {0}")]
    Failed(String),

    /// An I/O error occurred while talking to the service.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_constructors_set_protection() {
        assert!(!Network::open("cafe").protected);
        assert!(Network::protected("home").protected);
        assert_eq!(Network::open("cafe").essid, "cafe");
    }

    #[test]
    fn scan_state_display() {
        let loaded = ScanState::Loaded(vec![Network::open("a"), Network::open("b")]);
        assert_eq!(loaded.to_string(), "loaded (2 networks)");
        assert_eq!(ScanState::Failed.to_string(), "failed");
    }

    #[test]
    fn connect_state_display_names_essid() {
        let state = ConnectState::Succeeded("Home-5G".into());
        assert_eq!(state.to_string(), "connected to Home-5G");
    }

    #[test]
    fn service_error_display() {
        let err = ServiceError::Unreachable("dbus timeout".into());
        assert_eq!(err.to_string(), "network service unreachable: dbus timeout");
    }
}
