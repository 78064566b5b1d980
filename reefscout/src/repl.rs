//! Line-driven session standing in for mouse, touch and keyboard events.

use crate::terminal::{SearchField, TerminalMap, TerminalPage, Transcript};
use colored::Colorize;
use reefscout_core::{BucketList, LngLat, SearchController, SearchError, SiteDetail, SiteId};
use reefscout_client::{ClientError, SiteBackend};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

pub type Controller<B> = SearchController<B, TerminalMap, TerminalPage>;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Double-click at a point
    Pin(LngLat),
    /// Touch at a point and hold for the given time
    Hold(LngLat, Duration),
    /// Replace the search field text
    Type(String),
    Submit,
    Toggle,
    Clear,
    Add(SiteId),
    Remove(SiteId),
    /// Open the detail map for a site in the current results
    Show(SiteId),
    Help,
    Quit,
}

pub const HELP: &str = "\
  pin <lng> <lat>          drop a pin (double-click)
  hold <lng> <lat> <ms>    touch and hold for <ms> milliseconds
  type <text>              type into the search field
  submit                   run the search
  toggle                   show or hide the result list
  clear                    clear results
  add <id>                 add a site to your bucket list
  remove <id>              remove a site from your bucket list
  show <id>                open the map for a listed site
  help                     show this help
  quit                     leave";

fn parse_coordinate(value: Option<&str>, name: &str) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("missing {}", name))?;
    value
        .parse::<f64>()
        .map_err(|_| format!("invalid {} '{}'", name, value))
}

fn parse_point<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<LngLat, String> {
    let lng = parse_coordinate(parts.next(), "longitude")?;
    let lat = parse_coordinate(parts.next(), "latitude")?;
    Ok(LngLat::new(lng, lat))
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let mut parts = rest.split_whitespace();

    match word.to_lowercase().as_str() {
        "pin" => Ok(Command::Pin(parse_point(&mut parts)?)),
        "hold" => {
            let at = parse_point(&mut parts)?;
            let ms = parts
                .next()
                .ok_or("missing hold time")?
                .parse::<u64>()
                .map_err(|_| "invalid hold time".to_string())?;
            Ok(Command::Hold(at, Duration::from_millis(ms)))
        }
        "type" => Ok(Command::Type(rest.to_string())),
        "submit" | "search" => Ok(Command::Submit),
        "toggle" => Ok(Command::Toggle),
        "clear" => Ok(Command::Clear),
        "add" => parts
            .next()
            .map(|id| Command::Add(SiteId::from(id)))
            .ok_or_else(|| "missing site id".to_string()),
        "remove" => parts
            .next()
            .map(|id| Command::Remove(SiteId::from(id)))
            .ok_or_else(|| "missing site id".to_string()),
        "show" => parts
            .next()
            .map(|id| Command::Show(SiteId::from(id)))
            .ok_or_else(|| "missing site id".to_string()),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command '{}'", other)),
    }
}

pub struct Session<B> {
    pub controller: Controller<B>,
    pub bucket: BucketList<B, TerminalPage>,
    pub detail: SiteDetail<TerminalMap>,
    pub field: SearchField,
    pub transcript: Transcript,
}

impl<B: SiteBackend> Session<B> {
    /// Apply one command. Returns `false` once the session should end.
    pub async fn execute(&mut self, command: Command) -> bool {
        debug!("REPL command {:?}", command);
        match command {
            Command::Pin(at) => self.controller.double_click(at),
            Command::Hold(at, held_for) => {
                let press = self.controller.touch_start(at);
                let controller = &self.controller;
                tokio::join!(controller.hold(press), async {
                    tokio::time::sleep(held_for).await;
                    controller.touch_end();
                });
            }
            Command::Type(text) => {
                self.field.set(text);
                self.controller.search_text_changed();
            }
            Command::Submit => {
                let text = self.field.get();
                if let Err(SearchError::Backend(e)) = self.controller.submit(&text).await {
                    debug!("Search failed: {}", e);
                }
            }
            Command::Toggle => {
                self.controller.toggle_list();
            }
            Command::Clear => self.controller.clear_results(),
            Command::Add(id) => log_bucket_error(self.bucket.add(&id).await),
            Command::Remove(id) => log_bucket_error(self.bucket.remove(&id).await),
            Command::Show(id) => match self.controller.result(&id) {
                Some(site) => {
                    self.transcript
                        .push(format!("{} {}", "→".blue(), site.name.bright_white().bold()));
                    self.detail.show(&site);
                }
                None => self.transcript.push(format!(
                    "{} Site {} is not in the current results",
                    "✗".red().bold(),
                    id
                )),
            },
            Command::Help => self.transcript.push(HELP),
            Command::Quit => return false,
        }
        true
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        println!("Type 'help' for available commands, 'quit' to leave.");

        loop {
            print!("{} ", "reefscout>".bright_cyan().bold());
            std::io::Write::flush(&mut std::io::stdout())?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let keep_going = match parse_command(&line) {
                Ok(command) => self.execute(command).await,
                Err(e) => {
                    self.transcript.push(format!("{} {}", "✗".red().bold(), e));
                    true
                }
            };
            self.transcript.print();

            if !keep_going {
                break;
            }
        }
        Ok(())
    }
}

fn log_bucket_error(result: Result<String, ClientError>) {
    if let Err(e) = result {
        debug!("Bucket list request failed: {}", e);
    }
}
