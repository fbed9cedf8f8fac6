mod args;
mod merge_view;
mod settings;

use crate::merge_view::merge_view;
use crate::settings::Settings;
use anyhow::Result;

fn main() -> Result<()> {
    let args = crate::args::build_cli().get_matches();
    let settings = Settings::new(&args);

    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .parse_default_env()
        .init();

    let output = merge_view(&settings)?;
    print!("{}", output);
    Ok(())
}
