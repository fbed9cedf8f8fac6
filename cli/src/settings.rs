use clap::{Arg, ArgMatches, arg};
use log::LevelFilter;

pub struct Settings {
    // The text of the intervals to merge.  The demonstration input is used
    // when this is None.
    pub input: Option<String>,

    // Whether to merge raw pairs of numbers rather than intervals
    pub pairs: bool,

    // Default logging level, when RUST_LOG is not set
    pub log_level: LevelFilter,
}

impl Settings {
    /// Return the command line switches to configure the settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!([INTERVALS] "The list of intervals to merge"),
            arg!(--pairs "Merge the intervals as raw pairs of numbers"),
            arg!(-v --verbose ... "Show more logging, can be repeated"),
        ]
    }

    /// Create the settings from the command line arguments
    pub fn new(args: &ArgMatches) -> Self {
        Settings {
            input: args.get_one::<String>("INTERVALS").cloned(),
            pairs: args.get_flag("pairs"),
            log_level: match args.get_count("verbose") {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            },
        }
    }
}
