use colored::Colorize;
use commands::command_argument_builder;
use reefscout::handlers::{
    self, Connection, handle_bucket_add, handle_bucket_remove, handle_find, handle_near,
    handle_repl, handle_search,
};
use tracing_subscriber::EnvFilter;

mod commands;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    init_tracing(chosen_command.get_flag("verbose"));

    let connection = match Connection::from_args(&chosen_command) {
        Ok(connection) => connection,
        Err(e) => fail(e),
    };

    // Show banner unless --quiet flag is set
    if !quiet {
        handlers::print_banner(&connection);
    }

    let result = match chosen_command.subcommand() {
        None => {
            command_argument_builder().print_help().ok();
            Ok(())
        }
        Some(("near", primary_command)) => handle_near(&connection, primary_command).await,
        Some(("search", primary_command)) => handle_search(&connection, primary_command).await,
        Some(("find", primary_command)) => handle_find(&connection, primary_command).await,
        Some(("bucket", primary_command)) => match primary_command.subcommand() {
            Some(("add", secondary_command)) => {
                handle_bucket_add(&connection, secondary_command).await
            }
            Some(("remove", secondary_command)) => {
                handle_bucket_remove(&connection, secondary_command).await
            }
            _ => unreachable!("clap should ensure we don't get here"),
        },
        Some(("repl", _)) => handle_repl(&connection).await,
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = result {
        fail(e);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(error: anyhow::Error) -> ! {
    eprintln!("{} {:#}", "✗".red().bold(), error);
    std::process::exit(1);
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
