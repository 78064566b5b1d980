use crate::CLAP_STYLING;
use clap::{arg, command};
use reefscout::{DEFAULT_BASE_URL, parse_lng_lat};
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("reefscout")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("reefscout")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" "Log requests and rendering steps")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(--"base-url" <URL>)
                .required(false)
                .help("Origin of the dive site server")
                .env("REEFSCOUT_URL")
                .value_parser(clap::value_parser!(Url))
                .default_value(DEFAULT_BASE_URL)
                .global(true),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10")
                .global(true),
        )
        .arg(
            arg!(--"session" <COOKIE>)
                .required(false)
                .help("Cookie header for a logged-in session, e.g. 'session=...'")
                .env("REEFSCOUT_SESSION")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            arg!(-r --"radius" <MILES>)
                .required(false)
                .help("Search radius around a dropped pin")
                .value_parser(clap::value_parser!(u32))
                .default_value("100")
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("near")
                .about("Find dive sites around a point")
                .arg(
                    arg!(--"lng" <LNG>)
                        .required(true)
                        .help("Longitude of the search origin")
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true),
                )
                .arg(
                    arg!(--"lat" <LAT>)
                        .required(true)
                        .help("Latitude of the search origin")
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true),
                ),
        )
        .subcommand(
            command!("search")
                .about("Find dive sites by name")
                .arg(arg!(<QUERY>).help("At least two letters of the site name")),
        )
        .subcommand(
            command!("find")
                .about(
                    "Submit the search form: uses the pin when one is given, otherwise the \
                query text.",
                )
                .arg(
                    arg!(-p --"pin" <LNG_LAT>)
                        .required(false)
                        .help("Dropped pin as LNG,LAT (pass as --pin=-80.1,25.7)")
                        .value_parser(parse_lng_lat)
                        .allow_hyphen_values(true),
                )
                .arg(arg!([QUERY]).help("Site name to search for")),
        )
        .subcommand(
            command!("bucket")
                .about("Manage your bucket list")
                .subcommand_required(true)
                .subcommand(
                    command!("add")
                        .about("Adds a site to your bucket list")
                        .arg(arg!(<ID>).help("The site id")),
                )
                .subcommand(
                    command!("remove")
                        .about("Removes a site from your bucket list")
                        .arg(arg!(<ID>).help("The site id")),
                ),
        )
        .subcommand(command!("repl").about("Interactive session with pins, typing and submits"))
}
