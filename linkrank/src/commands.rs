use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("linkrank")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linkrank")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("rank")
                .about(
                    "Rank every page of an HTML corpus with both estimators and print the \
                two result sets for comparison.",
                )
                .arg(
                    arg!([CORPUS])
                        .required(true)
                        .help("Directory of HTML pages to rank")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-d --"damping" <FACTOR>)
                        .required(false)
                        .help("Probability of following a link instead of jumping to a random page")
                        .value_parser(clap::value_parser!(f64))
                        .default_value("0.85"),
                )
                .arg(
                    arg!(-n --"samples" <STEPS>)
                        .required(false)
                        .help("Length of the sampling estimator's random walk")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10000"),
                )
                .arg(
                    arg!(-s --"seed" <SEED>)
                        .required(false)
                        .help(
                            "Seed the sampling walk for reproducible output (default: OS entropy)",
                        )
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, csv, markdown")
                        .value_parser(["text", "json", "csv", "markdown"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            command!("graph")
                .about("Load an HTML corpus and print the link graph built from it")
                .arg(
                    arg!([CORPUS])
                        .required(true)
                        .help("Directory of HTML pages to inspect")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
}
