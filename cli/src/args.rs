use crate::settings::Settings;
use clap::Command;

pub(crate) fn build_cli() -> Command {
    Command::new("merge-intervals")
        .version("0.1")
        .about("Merge overlapping intervals")
        .after_help(
            "Intervals are given as [[25,30],[2,19],[14,23],[4,8]] or \
             [25,30],[2,19],[14,23],[4,8], without whitespace.\n\
             Set RUST_LOG to configure logging in more details.",
        )
        .args(Settings::cli())
}
