//! Today command: convert the current local calendar date.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use tracing::{debug, info_span};

use ethio_calendar::from_gregorian;

use crate::cli::TodayArgs;
use crate::render;

/// Run a conversion of today's date.
pub fn run(args: TodayArgs) -> Result<()> {
    let _cmd = info_span!("today").entered();

    // Truncate the local clock to a plain calendar date; time of day and
    // timezone play no further part.
    let today = Local::now().date_naive();
    let (year, month, day) = (today.year(), today.month() as u8, today.day() as u8);
    debug!(year, month, day, "using local date");

    let eth = from_gregorian(year, month, day)
        .with_context(|| format!("cannot convert {year}-{month:02}-{day:02}"))?;
    debug!(
        year = eth.year(),
        month = eth.month(),
        day = eth.day(),
        month_name = eth.month_name(),
        "converted"
    );

    render::emit(eth, &args.output)
}
