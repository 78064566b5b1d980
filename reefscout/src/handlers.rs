use crate::repl::Session;
use crate::terminal::{SearchField, TerminalMap, TerminalPage, Transcript};
use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reefscout_client::{ClientConfig, HttpBackend, SiteBackend};
use reefscout_core::{
    BucketList, LngLat, SearchController, SearchError, SearchOutcome, SearchSettings, SiteDetail,
    SiteId,
};
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Connection and search options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Connection {
    pub base_url: Url,
    pub timeout: Duration,
    pub session_cookie: Option<String>,
    pub radius: u32,
}

impl Connection {
    pub fn from_args(args: &ArgMatches) -> anyhow::Result<Self> {
        let base_url = args
            .get_one::<Url>("base-url")
            .cloned()
            .context("--base-url is required")?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(*args.get_one::<u64>("timeout").unwrap_or(&10)),
            session_cookie: args.get_one::<String>("session").cloned(),
            radius: *args.get_one::<u32>("radius").unwrap_or(&100),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.base_url.clone()).with_timeout(self.timeout);
        match &self.session_cookie {
            Some(cookie) => config.with_session_cookie(cookie.clone()),
            None => config,
        }
    }

    pub fn backend(&self) -> anyhow::Result<HttpBackend> {
        HttpBackend::new(self.client_config()).context("Failed to create HTTP client")
    }

    pub fn settings(&self) -> SearchSettings {
        SearchSettings::default().with_radius(self.radius)
    }
}

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Parse `LNG,LAT`, as accepted by `--pin`.
pub fn parse_lng_lat(value: &str) -> Result<LngLat, String> {
    let (lng, lat) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LNG,LAT but got '{}'", value))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;

    if !(-180.0..=180.0).contains(&lng) {
        return Err(format!("longitude {} is out of range", lng));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("latitude {} is out of range", lat));
    }
    Ok(LngLat::new(lng, lat))
}

pub fn print_banner(connection: &Connection) {
    println!(
        "{} {} {}",
        "reefscout".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").dimmed(),
        connection.base_url.as_str().bright_white()
    );
}

/// Build a controller drawing into terminal ports that share `transcript`.
pub fn terminal_controller<B: SiteBackend>(
    backend: B,
    connection: &Connection,
    transcript: &Transcript,
    field: &SearchField,
) -> SearchController<B, TerminalMap, TerminalPage> {
    let page = terminal_page(connection, transcript, field);
    controller_on_page(backend, connection, transcript, page)
}

pub fn terminal_page(
    connection: &Connection,
    transcript: &Transcript,
    field: &SearchField,
) -> TerminalPage {
    TerminalPage::new(transcript.clone(), field.clone()).with_base_url(connection.base_url.clone())
}

fn terminal_map(connection: &Connection, transcript: &Transcript) -> TerminalMap {
    TerminalMap::new(transcript.clone()).with_base_url(connection.base_url.clone())
}

fn controller_on_page<B: SiteBackend>(
    backend: B,
    connection: &Connection,
    transcript: &Transcript,
    page: TerminalPage,
) -> SearchController<B, TerminalMap, TerminalPage> {
    SearchController::new(backend, terminal_map(connection, transcript), page)
        .with_settings(connection.settings())
}

async fn with_spinner<F: Future>(message: &str, work: F) -> anyhow::Result<F::Output> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message.to_string());

    let output = work.await;
    spinner.finish_and_clear();
    Ok(output)
}

fn report_outcome(
    transcript: &Transcript,
    outcome: Result<SearchOutcome, SearchError>,
) -> anyhow::Result<()> {
    transcript.print();
    match outcome {
        Ok(SearchOutcome::Rendered { count }) => {
            println!("{} {} site(s) found", "✓".green().bold(), count);
            Ok(())
        }
        Ok(_) => Ok(()),
        // Message already shown to the user
        Err(SearchError::Validation(_)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

pub async fn handle_near(connection: &Connection, args: &ArgMatches) -> anyhow::Result<()> {
    let lng = *args.get_one::<f64>("lng").context("--lng is required")?;
    let lat = *args.get_one::<f64>("lat").context("--lat is required")?;

    let backend = connection.backend()?;
    let transcript = Transcript::new();
    let controller = terminal_controller(&backend, connection, &transcript, &SearchField::new());

    let outcome = with_spinner("Searching...", controller.search_by_location(lng, lat)).await?;
    report_outcome(&transcript, outcome)
}

pub async fn handle_search(connection: &Connection, args: &ArgMatches) -> anyhow::Result<()> {
    let query = args
        .get_one::<String>("QUERY")
        .context("a search query is required")?;

    let backend = connection.backend()?;
    let transcript = Transcript::new();
    let controller = terminal_controller(&backend, connection, &transcript, &SearchField::new());

    let outcome = with_spinner("Searching...", controller.search_by_text(query)).await?;
    report_outcome(&transcript, outcome)
}

/// Full form submission: a pin, if given, wins over the query text.
pub async fn handle_find(connection: &Connection, args: &ArgMatches) -> anyhow::Result<()> {
    let pin = args.get_one::<LngLat>("pin").copied();
    let query = args.get_one::<String>("QUERY").cloned().unwrap_or_default();

    let backend = connection.backend()?;
    let transcript = Transcript::new();
    let field = SearchField::new();
    let controller = terminal_controller(&backend, connection, &transcript, &field);

    field.set(query);
    if let Some(at) = pin {
        controller.double_click(at);
    }

    let outcome = with_spinner("Searching...", controller.submit(&field.get())).await?;
    report_outcome(&transcript, outcome)
}

pub async fn handle_bucket_add(connection: &Connection, args: &ArgMatches) -> anyhow::Result<()> {
    let id = args.get_one::<String>("ID").context("a site id is required")?;
    let backend = connection.backend()?;
    let transcript = Transcript::new();
    let page = TerminalPage::new(transcript.clone(), SearchField::new());
    let mut bucket = BucketList::new(&backend, page);

    let result = with_spinner(
        "Updating bucket list...",
        bucket.add(&SiteId::from(id.as_str())),
    )
    .await?;
    transcript.print();
    result.map(|_| ()).map_err(Into::into)
}

pub async fn handle_bucket_remove(
    connection: &Connection,
    args: &ArgMatches,
) -> anyhow::Result<()> {
    let id = args.get_one::<String>("ID").context("a site id is required")?;
    let backend = connection.backend()?;
    let transcript = Transcript::new();
    let page = TerminalPage::new(transcript.clone(), SearchField::new());
    let mut bucket = BucketList::new(&backend, page);

    let result = with_spinner(
        "Updating bucket list...",
        bucket.remove(&SiteId::from(id.as_str())),
    )
    .await?;
    transcript.print();
    result.map(|_| ()).map_err(Into::into)
}

pub async fn handle_repl(connection: &Connection) -> anyhow::Result<()> {
    let backend = connection.backend()?;
    let mut session = new_session(&backend, connection);
    session.run().await
}

pub fn new_session<B: SiteBackend + Copy>(backend: B, connection: &Connection) -> Session<B> {
    let transcript = Transcript::new();
    let field = SearchField::new();
    // Bucket list buttons act on the same list the results are drawn into
    let page = terminal_page(connection, &transcript, &field);
    let bucket = BucketList::new(backend, page.clone());
    let controller = controller_on_page(backend, connection, &transcript, page);
    let detail = SiteDetail::new(terminal_map(connection, &transcript));

    Session {
        controller,
        bucket,
        detail,
        field,
        transcript,
    }
}
