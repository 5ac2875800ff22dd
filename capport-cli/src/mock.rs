use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use capport::{ConnectOutcome, Network, NetworkService, ServiceError};
use log::{debug, info};

/// A stand-in for the real network daemon.
///
/// Carries a fixed set of networks and per-network passwords, plus one hidden
/// network (`backoffice`) that never shows up in scans. The fault flags make
/// the two error paths reachable from the command line.
pub struct MockService {
    networks: Vec<Network>,
    passwords: HashMap<&'static str, &'static str>,
    fail_scans: bool,
    fail_connects: bool,
}

impl MockService {
    pub fn new(fail_scans: bool, fail_connects: bool) -> Self {
        let networks = vec![
            Network::protected("Home_Fiber_5G"),
            Network::protected("Office_Main"),
            Network::open("Coffee_Shop_Free"),
            Network::open("Guest_Network"),
            Network::protected("Linksys_502"),
        ];
        let passwords = HashMap::from([
            ("Home_Fiber_5G", "hunter2"),
            ("Office_Main", "correct-horse"),
            ("Linksys_502", "admin123"),
            // Hidden: joinable by typing the essid, never scanned.
            ("backoffice", "s3cret"),
        ]);
        Self {
            networks,
            passwords,
            fail_scans,
            fail_connects,
        }
    }
}

#[async_trait(?Send)]
impl NetworkService for MockService {
    async fn scan_networks(&self) -> capport::Result<Vec<Network>> {
        tokio::time::sleep(Duration::from_millis(300)).await;
        if self.fail_scans {
            return Err(ServiceError::Unreachable("scan transport down".into()));
        }
        debug!("Mock scan returning {} networks", self.networks.len());
        Ok(self.networks.clone())
    }

    async fn connect(&self, essid: &str, password: &str) -> capport::Result<ConnectOutcome> {
        tokio::time::sleep(Duration::from_millis(600)).await;
        if self.fail_connects {
            return Err(ServiceError::Failed("connect transport down".into()));
        }

        let outcome = match self.passwords.get(essid) {
            Some(expected) => {
                if *expected == password {
                    ConnectOutcome::Accepted
                } else {
                    ConnectOutcome::Rejected
                }
            }
            // Open networks take anything; unknown essids are refused.
            None if self.networks.iter().any(|n| n.essid == essid && !n.protected) => {
                ConnectOutcome::Accepted
            }
            None => ConnectOutcome::Rejected,
        };
        debug!("Mock connect to {essid}: {outcome:?}");
        Ok(outcome)
    }

    async fn start_access_point(&self) -> capport::Result<()> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        info!("Mock access point up");
        Ok(())
    }
}
