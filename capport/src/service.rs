use async_trait::async_trait;

use crate::models::{ConnectOutcome, Network};

/// The opaque network transport behind the portal.
///
/// Implementations wrap whatever actually talks to the wireless stack
/// (NetworkManager, wpa_supplicant, a vendor daemon, a test double). The
/// portal imposes no timeout of its own and waits for each call to settle;
/// timeout semantics belong to the implementation.
///
/// The trait is `?Send`: everything runs on one cooperative event loop.
#[async_trait(?Send)]
pub trait NetworkService {
    /// Returns the currently observable networks, in whatever order the
    /// underlying stack reports them.
    async fn scan_networks(&self) -> crate::Result<Vec<Network>>;

    /// Attempts to join `essid` with `password` (empty for open networks).
    ///
    /// `Ok(ConnectOutcome::Rejected)` means the attempt completed and was
    /// refused (typically bad credentials); `Err` means the call itself
    /// failed.
    async fn connect(&self, essid: &str, password: &str) -> crate::Result<ConnectOutcome>;

    /// Switches the device into self-hosted access-point mode.
    async fn start_access_point(&self) -> crate::Result<()>;
}
