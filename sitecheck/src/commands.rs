use clap::{ArgAction, arg, value_parser};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitecheck")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitecheck")
        .about("Check a batch of websites for reachability")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-l --"list" <PATH>)
                .required(false)
                .help("Path to a newline-delimited file of URLs to check"),
        )
        .arg(
            arg!(-u --"url" <URL>)
                .required(false)
                .help("One or more URLs to check")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Append reachable (HTTP 200) URLs to this file"),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("10"),
        )
        .arg(arg!(-q --"quiet" "Suppress the startup banner").required(false))
        .arg(
            arg!(-v --"verbose" "Increase log verbosity (-v info, -vv debug)")
                .required(false)
                .action(ArgAction::Count),
        )
}
