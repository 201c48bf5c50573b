//! Interactive browse session.
//!
//! The session loop is the single owner of [`DiscoveryState`]. City changes
//! spawn a fetch task that reports back over a channel together with the
//! ticket it was issued; [`DiscoveryState::apply`] drops results whose ticket
//! has been superseded, so rapid switching always settles on the last city
//! chosen.

use std::sync::Arc;

use dinefind_core::{AppConfig, CityFilter, DiscoveryState, RequestTicket};
use dinefind_sources::{LoadOutcome, SourceSelector};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::notify::ConsoleNotifier;
use crate::render;

const HELP: &str = "\
commands:
  city <name|All>   switch city (Chhindwara, Mumbai, Pune, Bangalore, Delhi)
  search <text>     filter by name
  clear             remove the name filter
  next | prev       move one page
  page <n>          jump to page n
  show              print the current page
  broken <id>       show the placeholder for a listing whose image failed
  help              print this message
  quit              leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    City(CityFilter),
    Search(String),
    Clear,
    Next,
    Prev,
    Page(usize),
    ImageFailed(String),
    Show,
    Help,
    Quit,
}

type FetchResult = (RequestTicket, LoadOutcome);

/// # Errors
///
/// Returns an error if the HTTP client cannot be built or stdin cannot be read.
pub(crate) async fn run_browse(config: &AppConfig, initial: CityFilter) -> anyhow::Result<()> {
    let selector = Arc::new(
        SourceSelector::from_config(config)
            .map_err(|e| anyhow::anyhow!("failed to build listing sources: {e}"))?,
    );
    let mut state = DiscoveryState::new(config.page_size)?;
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchResult>();

    spawn_load(&selector, &tx, state.select_city(initial));
    println!("loading {} ...", initial.heading());
    print!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(BrowseCommand::Quit) => break,
                    Ok(BrowseCommand::Help) => print!("{HELP}"),
                    Ok(command) => {
                        if let Some(ticket) = apply_command(&mut state, command) {
                            println!("loading {} ...", ticket.city().heading());
                            spawn_load(&selector, &tx, ticket);
                        } else {
                            print!("{}", render::render_page(&state.view()));
                        }
                    }
                    Err(message) => eprintln!("{message}"),
                }
            }
            Some((ticket, outcome)) = rx.recv() => {
                if !state.is_current(ticket) {
                    tracing::debug!(seq = ticket.seq(), city = %ticket.city(), "ignoring superseded fetch");
                    continue;
                }
                if let Some(listings) = outcome.into_listings() {
                    state.apply(ticket, listings);
                }
                print!("{}", render::render_page(&state.view()));
            }
        }
    }

    Ok(())
}

fn spawn_load(
    selector: &Arc<SourceSelector>,
    tx: &mpsc::UnboundedSender<FetchResult>,
    ticket: RequestTicket,
) {
    let selector = Arc::clone(selector);
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = selector.load(ticket.city(), &ConsoleNotifier).await;
        if tx.send((ticket, outcome)).is_err() {
            tracing::debug!(seq = ticket.seq(), "browse session ended before fetch completed");
        }
    });
}

fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    match verb.to_ascii_lowercase().as_str() {
        "city" => rest
            .parse::<CityFilter>()
            .map(BrowseCommand::City)
            .map_err(|e| e.to_string()),
        "search" => Ok(BrowseCommand::Search(rest.to_owned())),
        "clear" => Ok(BrowseCommand::Clear),
        "next" | "n" => Ok(BrowseCommand::Next),
        "prev" | "p" => Ok(BrowseCommand::Prev),
        "page" => rest
            .parse::<usize>()
            .map(BrowseCommand::Page)
            .map_err(|_| format!("expected a page number, got \"{rest}\"")),
        "broken" if rest.is_empty() => Err("expected a listing id".to_owned()),
        "broken" => Ok(BrowseCommand::ImageFailed(rest.to_owned())),
        "show" => Ok(BrowseCommand::Show),
        "help" | "?" => Ok(BrowseCommand::Help),
        "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
        other => Err(format!("unknown command \"{other}\" (type `help`)")),
    }
}

/// Applies a state-changing command. Returns a ticket when a fetch must follow.
fn apply_command(state: &mut DiscoveryState, command: BrowseCommand) -> Option<RequestTicket> {
    match command {
        BrowseCommand::City(city) => return Some(state.select_city(city)),
        BrowseCommand::Search(query) => state.set_query(query),
        BrowseCommand::Clear => state.set_query(String::new()),
        BrowseCommand::Next => {
            state.next_page();
        }
        BrowseCommand::Prev => {
            state.prev_page();
        }
        BrowseCommand::Page(page) => {
            state.go_to_page(page);
        }
        BrowseCommand::ImageFailed(id) => {
            if !state.image_failed(&id) {
                tracing::debug!(%id, "no listing to mark image failed");
            }
        }
        BrowseCommand::Show | BrowseCommand::Help | BrowseCommand::Quit => {}
    }
    None
}
