pub mod mock;

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use capport::prompt::{Field, HiddenNetworkPrompt, PasswordPrompt};
use capport::view::{self, ListEntry, Selection};
use capport::{HostEvents, Notice, Notifier, Portal, PortalEvent};
use clap::{ArgAction, Parser};

use crate::mock::MockService;

#[derive(Parser, Debug)]
#[command(name = "capport")]
#[command(disable_version_flag = true)]
#[command(version)]
struct Args {
    #[arg(short = 'V', long = "version", action = ArgAction::SetTrue)]
    version: bool,

    /// Make every scan fail, to walk the error placeholder path.
    #[arg(long)]
    fail_scans: bool,

    /// Make every connect call fail at the transport level.
    #[arg(long)]
    fail_connects: bool,
}

pub fn run() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Args { version: true, .. } = args {
        println!("capport {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(portal_loop(args))
}

/// What the host flow does when the portal reports back: remember the
/// outcome and let the loop wind down.
#[derive(Default)]
struct HostFlow {
    finished: Cell<bool>,
}

struct HostFlowHandle(Rc<HostFlow>);

impl HostEvents for HostFlowHandle {
    fn on_connected(&self, essid: &str) {
        println!("Connected to \"{essid}\". Handing control back to the host flow.");
        self.0.finished.set(true);
    }

    fn on_access_point_started(&self) {
        println!("Access-point mode requested. Handing control back to the host flow.");
        self.0.finished.set(true);
    }
}

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn warn(&self, notice: Notice) {
        println!(
            "! {} (clears after {}s)",
            notice.message,
            notice.timeout.as_secs()
        );
    }
}

async fn portal_loop(args: Args) -> anyhow::Result<()> {
    let service = MockService::new(args.fail_scans, args.fail_connects);
    let host = Rc::new(HostFlow::default());
    let mut portal = Portal::new(
        service,
        Box::new(HostFlowHandle(host.clone())),
        Box::new(TerminalNotifier),
    );

    portal.activate().await;

    while !host.finished.get() {
        let entries = view::render(&portal);
        print_list(&entries);
        println!("[number] join   h hidden network   a use access point   r refresh   q quit");

        let line = read_line("> ")?;
        match line.trim() {
            "q" => break,
            "r" => portal.handle(PortalEvent::RefreshRequested).await,
            "a" => portal.handle(PortalEvent::AccessPointRequested).await,
            "h" => {
                let event = hidden_network_event()?;
                portal.handle(event).await;
            }
            other => match other.parse::<usize>() {
                Ok(idx) if idx < entries.len() => {
                    if let Some(event) = selection_event(&entries[idx])? {
                        portal.handle(event).await;
                    }
                }
                _ => println!("Unrecognized input: {other}"),
            },
        }
    }

    Ok(())
}

fn print_list(entries: &[ListEntry]) {
    println!();
    for (idx, entry) in entries.iter().enumerate() {
        match entry {
            ListEntry::Placeholder(text) => println!("      {text}"),
            ListEntry::Network { essid, protected } => {
                let lock = if *protected { "[locked]" } else { "[open]  " };
                println!("  {idx}: {lock} {essid}");
            }
        }
    }
}

fn selection_event(entry: &ListEntry) -> anyhow::Result<Option<PortalEvent>> {
    match entry.select() {
        None => Ok(None),
        Some(Selection::Connect { essid }) => Ok(Some(PortalEvent::NetworkSelected { essid })),
        Some(Selection::PromptPassword { essid }) => {
            let mut prompt = PasswordPrompt::new();
            prompt.input(read_line(&format!("Password for \"{essid}\": "))?);
            Ok(Some(PortalEvent::CredentialsConfirmed {
                essid,
                password: prompt.confirm(),
            }))
        }
    }
}

fn hidden_network_event() -> anyhow::Result<PortalEvent> {
    let mut prompt = HiddenNetworkPrompt::new();
    prompt.input(read_line("ESSID: ")?);
    prompt.focus(Field::Password);
    prompt.input(read_line("Password: ")?);
    let (essid, password) = prompt.confirm();
    Ok(PortalEvent::CredentialsConfirmed { essid, password })
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
