//! Convert command: turn an explicit Gregorian date into an Ethiopian one.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use ethio_calendar::from_gregorian;

use crate::cli::ConvertArgs;
use crate::render;

/// Run a single date conversion.
pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    let eth = from_gregorian(args.year, args.month, args.day).with_context(|| {
        format!(
            "cannot convert {}-{:02}-{:02}",
            args.year, args.month, args.day
        )
    })?;
    debug!(
        year = eth.year(),
        month = eth.month(),
        day = eth.day(),
        month_name = eth.month_name(),
        "converted"
    );

    render::emit(eth, &args.output)
}
