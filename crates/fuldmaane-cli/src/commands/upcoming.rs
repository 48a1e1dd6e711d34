//! Upcoming command implementation.

use super::Context;
use crate::cli::UpcomingArgs;
use crate::error::{CliError, Result};
use fuldmaane_domain::upcoming_full_moons;
use std::io::Write;
use tracing::debug;

/// Upper bound on how many dates one invocation lists.
const MAX_COUNT: usize = 1000;

/// Execute the upcoming command.
pub fn execute_upcoming(
    args: UpcomingArgs,
    default_count: usize,
    ctx: &Context<'_>,
    out: &mut dyn Write,
) -> Result<()> {
    let count = args.count.unwrap_or(default_count);
    if count > MAX_COUNT {
        return Err(CliError::InvalidInput(format!(
            "count must be at most {}, got {}",
            MAX_COUNT, count
        )));
    }

    let from = ctx.date_or_today(args.date);
    let dates = upcoming_full_moons(&from, count);
    debug!(from = %from, count, "listing upcoming full moons");

    writeln!(
        out,
        "{}",
        ctx.formatter.format_upcoming(&from, &dates, ctx.locale)?
    )?;
    Ok(())
}
