use crate::models::{Network, ScanState};
use crate::portal::Portal;
use crate::service::NetworkService;

/// One row of the network list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    /// A single disabled row shown instead of networks ("Loading..." or
    /// "An error occurred").
    Placeholder(&'static str),
    /// A selectable network, with the lock/unlock affordance.
    Network { essid: String, protected: bool },
}

/// What selecting a list entry should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Open network: connect right away.
    Connect { essid: String },
    /// Protected network: open the password prompt anchored to this entry.
    PromptPassword { essid: String },
}

impl ListEntry {
    fn network(net: &Network) -> Self {
        Self::Network {
            essid: net.essid.clone(),
            protected: net.protected,
        }
    }

    /// Maps a selection gesture to an action. Placeholders are disabled and
    /// yield nothing.
    pub fn select(&self) -> Option<Selection> {
        match self {
            Self::Placeholder(_) => None,
            Self::Network { essid, protected: false } => Some(Selection::Connect {
                essid: essid.clone(),
            }),
            Self::Network { essid, protected: true } => Some(Selection::PromptPassword {
                essid: essid.clone(),
            }),
        }
    }
}

/// Projects the portal's state into list rows, in scan order.
///
/// An empty or cleared list renders the "Loading..." placeholder, a failed
/// scan or connect call the "An error occurred" one. While a connect attempt
/// is in flight the list was already cleared, so no network row can appear.
pub fn render<S: NetworkService>(portal: &Portal<S>) -> Vec<ListEntry> {
    match portal.scan_state() {
        ScanState::Failed => vec![ListEntry::Placeholder("An error occurred")],
        ScanState::Idle | ScanState::Loading => vec![ListEntry::Placeholder("Loading...")],
        ScanState::Loaded(networks) if networks.is_empty() => {
            vec![ListEntry::Placeholder("Loading...")]
        }
        ScanState::Loaded(networks) => networks.iter().map(ListEntry::network).collect(),
    }
}
