//! Captive-portal network selection and connection state machine.
//!
//! This crate implements the device-side logic behind a captive-portal
//! network-configuration screen:
//!
//! - Scanning for visible networks and projecting them into a list view
//! - Capturing credentials for protected and hidden networks
//! - Driving a connect attempt and disambiguating success, rejection, and
//!   service failure
//! - Falling back to self-hosted access-point mode
//!
//! The wireless stack itself stays behind the [`NetworkService`] trait; the
//! host application observes outcomes through [`HostEvents`] and user-facing
//! warnings through [`Notifier`]. Nothing is persisted and no wire protocol
//! is owned here.
//!
//! # Example
//!
//! ```no_run
//! use capport::{Portal, PortalEvent};
//! # async fn example(service: impl capport::NetworkService,
//! #                  host: Box<dyn capport::HostEvents>,
//! #                  notifier: Box<dyn capport::Notifier>) {
//! let mut portal = Portal::new(service, host, notifier);
//!
//! // First activation scans exactly once.
//! portal.activate().await;
//!
//! // User picked an open network from the list.
//! portal
//!     .handle(PortalEvent::NetworkSelected { essid: "cafe-guest".into() })
//!     .await;
//! # }
//! ```
//!
//! # Concurrency
//!
//! Everything runs on one cooperative event loop; the service trait is
//! `?Send` and no locking is used. A connect attempt in flight is the only
//! mutual exclusion: user events are ignored until it settles. Scan
//! completions are tagged with a [`ScanToken`] and stale completions are
//! discarded, so overlapping refreshes cannot leave an outdated list on
//! screen.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade. State transitions
//! are logged at `debug`, discarded or refused events at `warn`.

// Public API modules
pub mod events;
pub mod models;
pub mod notify;
pub mod portal;
pub mod prompt;
pub mod service;
pub mod view;

// Re-exported public API
pub use events::PortalEvent;
pub use models::{ConnectOutcome, ConnectState, Network, ScanState, ServiceError};
pub use notify::{HostEvents, Notice, Notifier};
pub use portal::{Portal, ScanToken};
pub use prompt::{Field, HiddenNetworkPrompt, PasswordPrompt};
pub use service::NetworkService;
pub use view::{ListEntry, Selection};

/// A specialized `Result` type for service-boundary operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
