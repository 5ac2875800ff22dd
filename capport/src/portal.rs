use log::{debug, warn};

use crate::events::PortalEvent;
use crate::models::{ConnectOutcome, ConnectState, Network, ScanState};
use crate::notify::{HostEvents, Notice, Notifier};
use crate::service::NetworkService;

/// Identifies one issued scan so its completion can be matched up.
///
/// Tokens are handed out in increasing order and only the most recently
/// issued one is accepted back; a completion carrying an older token is
/// discarded. This is what keeps two overlapping refreshes from leaving a
/// stale list on screen when they resolve out of issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanToken(u64);

/// The connection orchestrator.
///
/// Owns the scan and connect state, turns [`PortalEvent`]s into service
/// calls, and reports outcomes through the injected [`HostEvents`] and
/// [`Notifier`]. See the crate docs for the overall flow.
pub struct Portal<S> {
    service: S,
    host: Box<dyn HostEvents>,
    notifier: Box<dyn Notifier>,
    scan: ScanState,
    connect: ConnectState,
    scan_seq: u64,
    initialized: bool,
}

impl<S: NetworkService> Portal<S> {
    pub fn new(service: S, host: Box<dyn HostEvents>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            service,
            host,
            notifier,
            scan: ScanState::Idle,
            connect: ConnectState::NotConnecting,
            scan_seq: 0,
            initialized: false,
        }
    }

    pub fn scan_state(&self) -> &ScanState {
        &self.scan
    }

    pub fn connect_state(&self) -> &ConnectState {
        &self.connect
    }

    /// Whether a connect attempt is in flight (busy overlay shown, all other
    /// controls inert).
    pub fn is_connecting(&self) -> bool {
        self.connect == ConnectState::Connecting
    }

    /// Runs the one automatic scan on first activation. Re-activating later
    /// does nothing.
    pub async fn activate(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.refresh().await;
    }

    /// Dispatches one user event.
    ///
    /// Everything is refused while a connect attempt is in flight; the busy
    /// overlay blocks interaction and this is the matching guard. Once an
    /// attempt has succeeded the portal is done and events are dropped too,
    /// since the host flow owns the device from there.
    pub async fn handle(&mut self, event: PortalEvent) {
        if self.is_connecting() {
            warn!("Ignoring {event:?} while a connect attempt is in flight");
            return;
        }
        if let ConnectState::Succeeded(essid) = &self.connect {
            warn!("Ignoring {event:?}: already connected to {essid}");
            return;
        }

        match event {
            PortalEvent::RefreshRequested => self.refresh().await,
            PortalEvent::NetworkSelected { essid } => self.select_open_network(&essid).await,
            PortalEvent::CredentialsConfirmed { essid, password } => {
                self.select_protected_network(&essid, &password).await
            }
            PortalEvent::AccessPointRequested => self.start_access_point().await,
        }
    }

    /// Clears the list and error state and runs one scan to completion.
    pub async fn refresh(&mut self) {
        let token = self.begin_scan();
        let result = self.service.scan_networks().await;
        self.scan_completed(token, result);
    }

    /// Issues a scan: clears the current list and error state and returns the
    /// token its completion must carry.
    pub fn begin_scan(&mut self) -> ScanToken {
        self.scan_seq += 1;
        self.scan = ScanState::Loading;
        debug!("Scan {} issued", self.scan_seq);
        ScanToken(self.scan_seq)
    }

    /// Applies a scan completion. Completions for anything but the most
    /// recently issued scan are discarded.
    pub fn scan_completed(&mut self, token: ScanToken, result: crate::Result<Vec<Network>>) {
        if token.0 != self.scan_seq {
            debug!(
                "Discarding completion of scan {} (scan {} has been issued since)",
                token.0, self.scan_seq
            );
            return;
        }

        match result {
            Ok(networks) => {
                debug!("Scan {} completed with {} networks", token.0, networks.len());
                self.scan = ScanState::Loaded(networks);
            }
            Err(e) => {
                warn!("Scan {} failed: {e}", token.0);
                self.scan = ScanState::Failed;
            }
        }
    }

    /// Connects to a network known to be open.
    pub async fn select_open_network(&mut self, essid: &str) {
        self.attempt_connect(essid, "").await;
    }

    /// Connects with credentials committed by a prompt. The password is
    /// forwarded as typed; an empty string is not rejected here.
    pub async fn select_protected_network(&mut self, essid: &str, password: &str) {
        self.attempt_connect(essid, password).await;
    }

    /// Runs one connect attempt to completion.
    pub async fn attempt_connect(&mut self, essid: &str, password: &str) {
        if !self.begin_connect(essid) {
            return;
        }
        let result = self.service.connect(essid, password).await;
        self.connect_completed(essid, result).await;
    }

    /// Starts a connect attempt: blocks further interaction and clears the
    /// list so no stale entry can be selected. Returns false if an attempt
    /// is already in flight.
    pub fn begin_connect(&mut self, essid: &str) -> bool {
        if self.is_connecting() {
            warn!("Refusing connect to {essid}: another attempt is in flight");
            return false;
        }
        debug!("Connecting to {essid}");
        self.connect = ConnectState::Connecting;
        // Invalidate any scan still in flight; its completion must not
        // repopulate the list mid-attempt.
        self.scan_seq += 1;
        self.scan = ScanState::Idle;
        true
    }

    /// Applies a connect completion.
    ///
    /// Success notifies the host and is terminal. A rejection warns the user
    /// and re-scans so they can retry. A failed call leaves the error
    /// placeholder up without re-scanning, so a systemic failure is not
    /// masked by silent retries.
    pub async fn connect_completed(
        &mut self,
        essid: &str,
        result: crate::Result<ConnectOutcome>,
    ) {
        match result {
            Ok(ConnectOutcome::Accepted) => {
                debug!("Connected to {essid}");
                self.connect = ConnectState::Succeeded(essid.to_string());
                self.host.on_connected(essid);
            }
            Ok(ConnectOutcome::Rejected) => {
                warn!("Connect to {essid} rejected");
                self.connect = ConnectState::NotConnecting;
                self.notifier.warn(Notice::connect_rejected(essid));
                self.refresh().await;
            }
            Err(e) => {
                warn!("Connect call to {essid} failed: {e}");
                self.connect = ConnectState::Failed;
                self.scan = ScanState::Failed;
            }
        }
    }

    /// Switches the device into access-point mode and tells the host.
    ///
    /// Fire-and-forget: the host callback fires whether or not the service
    /// call succeeded, and any follow-up confirmation is the host's job.
    pub async fn start_access_point(&mut self) {
        if let Err(e) = self.service.start_access_point().await {
            warn!("Start access point failed: {e}");
        }
        self.host.on_access_point_started();
    }
}
