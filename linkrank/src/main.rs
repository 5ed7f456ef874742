use clap;
use commands::command_argument_builder;
use linkrank::handlers::{handle_graph, handle_rank};

mod commands;

const BANNER: &str = r#"
  _ _       _                     _
 | (_)_ __ | | __ _ __ __ _ _ __ | | __
 | | | '_ \| |/ /| '__/ _` | '_ \| |/ /
 | | | | | |   < | | | (_| | | | |   <
 |_|_|_| |_|_|\_\|_|  \__,_|_| |_|_|\_\
"#;

fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("rank", primary_command)) => handle_rank(primary_command),
        Some(("graph", primary_command)) => handle_graph(primary_command),
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

fn print_banner() {
    println!("{}", BANNER);
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
