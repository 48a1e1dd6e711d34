//! Show command implementation.

use super::Context;
use crate::cli::ShowArgs;
use crate::error::Result;
use fuldmaane_domain::MoonReport;
use std::io::Write;
use tracing::{debug, info};

/// Execute the show command.
pub fn execute_show(args: ShowArgs, ctx: &Context<'_>, out: &mut dyn Write) -> Result<()> {
    let date = ctx.date_or_today(args.date);
    let report = MoonReport::for_date(date, ctx.locale);

    debug!(
        date = %report.date,
        phase = report.phase,
        bucket = report.bucket.as_str(),
        "computed moon phase"
    );
    info!(
        full_moon = report.is_full_moon(),
        next_in_days = report.days_until_next_full_moon,
        last_full_moon = %report.last_full_moon,
        "rendering report"
    );

    writeln!(out, "{}", ctx.formatter.format_report(&report)?)?;
    Ok(())
}
