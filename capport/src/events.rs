/// User-originated events fed into the portal.
///
/// Scan and connect completions are not user events; they enter through
/// [`Portal::scan_completed`](crate::Portal::scan_completed) and
/// [`Portal::connect_completed`](crate::Portal::connect_completed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalEvent {
    /// The refresh control was activated.
    RefreshRequested,
    /// An open network was selected from the list. Protected selections go
    /// through the credential prompt and arrive as `CredentialsConfirmed`.
    NetworkSelected { essid: String },
    /// A credential prompt committed. Covers both a listed protected network
    /// and a manually specified hidden one.
    CredentialsConfirmed { essid: String, password: String },
    /// The access-point fallback control was activated.
    AccessPointRequested,
}
