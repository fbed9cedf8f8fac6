use crate::settings::Settings;
use anyhow::Result;
use interval_merge::{
    Error, Interval, formatters::format_list, merge, merge_pairs,
    parse_intervals,
};
use std::fmt::Write;

const SEPARATOR: &str = "---------------------";

/// The input used when no intervals are given on the command line
pub fn demo_intervals() -> Vec<Interval> {
    vec![
        Interval::new(25.0, 30.0),
        Interval::new(2.0, 19.0),
        Interval::new(14.0, 23.0),
        Interval::new(4.0, 8.0),
    ]
}

/// Read the intervals from the settings.  Invalid input is reported in
/// `out`, and results in an empty list.
fn read_intervals(
    out: &mut String,
    settings: &Settings,
) -> Result<Vec<Interval>> {
    let Some(text) = &settings.input else {
        return Ok(demo_intervals());
    };

    match parse_intervals(text) {
        Ok(intervals) => Ok(intervals),
        Err(e @ Error::Brackets(_)) => {
            log::debug!("{e}");
            writeln!(
                out,
                "Your input list was invalid. Please check your input and \
                 make sure that you only use numbers, commas and the \
                 respective brackets, without any whitespace characters."
            )?;
            writeln!(
                out,
                "The following two examples would be valid: \
                 [[25,30],[2,19],[14,23],[4,8]] or [25,30],[2,19],[14,23],[4,8]"
            )?;
            Ok(Vec::new())
        }
        Err(e) => {
            writeln!(
                out,
                "Your provided list includes at least one invalid input or \
                 interval: {e}"
            )?;
            Ok(Vec::new())
        }
    }
}

/// Merge the intervals described by the settings, and return the text to
/// display.
pub fn merge_view(settings: &Settings) -> Result<String> {
    let mut out = String::new();
    let intervals = read_intervals(&mut out, settings)?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Input: {}", format_list(&intervals))?;
    writeln!(out, "\nMerging overlapping intervals...\n")?;

    let merged = if settings.pairs {
        merge_pairs(intervals.into_iter().map(|i| Some(<[f64; 2]>::from(i))))
            .into_iter()
            .map(|[start, end]| Interval::new(start, end))
            .collect()
    } else {
        merge(intervals)
    };
    writeln!(out, "{}", format_list(&merged))?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(out)
}

#[cfg(test)]
mod test {
    use crate::merge_view::merge_view;
    use crate::settings::Settings;
    use log::LevelFilter;

    fn settings(input: Option<&str>, pairs: bool) -> Settings {
        Settings {
            input: input.map(str::to_string),
            pairs,
            log_level: LevelFilter::Warn,
        }
    }

    #[test]
    fn test_demo() -> anyhow::Result<()> {
        let expected = "---------------------\n\
            Input: [[25,30], [2,19], [14,23], [4,8]]\n\
            \n\
            Merging overlapping intervals...\n\
            \n\
            [[2,23], [25,30]]\n\
            ---------------------\n";
        assert_eq!(merge_view(&settings(None, false))?, expected);
        assert_eq!(merge_view(&settings(None, true))?, expected);
        Ok(())
    }

    #[test]
    fn test_input() -> anyhow::Result<()> {
        let out =
            merge_view(&settings(Some("[20,25],[25,30],[30,35]"), false))?;
        assert!(out.contains("Input: [[20,25], [25,30], [30,35]]\n"));
        assert!(out.contains("\n[[20,35]]\n"));

        let out = merge_view(&settings(Some("[[1.5,20.33],[0,1]]"), true))?;
        assert!(out.contains("\n[[0,1], [1.5,20.33]]\n"));
        Ok(())
    }

    #[test]
    fn test_invalid_input() -> anyhow::Result<()> {
        let out = merge_view(&settings(Some("1,2],[3,4]"), false))?;
        assert!(out.starts_with("Your input list was invalid."));
        assert!(out.contains("Input: []\n"));
        assert!(out.contains("\n[]\n"));

        let out = merge_view(&settings(Some("[[1,2],[x,4]]"), false))?;
        assert!(out.starts_with(
            "Your provided list includes at least one invalid input or interval"
        ));
        assert!(out.contains("Input: []\n"));
        Ok(())
    }
}
