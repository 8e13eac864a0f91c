//! Ordinal and date commands.

use anyhow::{Context, Result, anyhow, bail};
use tracing::info;

use toolbelt_calendar::{
    CalendarDate, MAX_YEAR, MIN_YEAR, UNIX_EPOCH_ORDINAL, checked_to_date, to_ordinal,
};

use crate::cli::{DateArgs, OrdinalArgs};
use crate::config::CalendarToml;

/// Run the `ordinal` command.
pub fn run_ordinal(args: OrdinalArgs, config: &CalendarToml) -> Result<()> {
    println!("{}", ordinal_of(&args, config)?);
    Ok(())
}

/// Run the `date` command.
pub fn run_date(args: DateArgs, config: &CalendarToml) -> Result<()> {
    let date = date_of(&args, config)?;
    println!("{date} {}", date.weekday());
    Ok(())
}

fn ordinal_of(args: &OrdinalArgs, config: &CalendarToml) -> Result<i64> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&args.year) {
        bail!("year {} is outside the supported range", args.year);
    }

    let ordinal = if args.strict || config.strict {
        let month = u8::try_from(args.month)
            .map_err(|_| anyhow!("invalid month: {} (must be 1..=12)", args.month))?;
        let day = u8::try_from(args.day)
            .map_err(|_| anyhow!("invalid day: {} for month {month}", args.day))?;
        CalendarDate::new(args.year, month, day)?.ordinal()
    } else {
        let ordinal = to_ordinal(args.year, args.month.into(), args.day.into());
        let real = u8::try_from(args.month)
            .ok()
            .zip(u8::try_from(args.day).ok())
            .is_some_and(|(m, d)| CalendarDate::new(args.year, m, d).is_ok());
        if !real {
            info!(
                year = args.year,
                month = args.month,
                day = args.day,
                "not a calendar date, ordinal is unchecked"
            );
        }
        ordinal
    };

    if args.unix || config.unix_epoch {
        Ok(ordinal - UNIX_EPOCH_ORDINAL)
    } else {
        Ok(ordinal)
    }
}

fn date_of(args: &DateArgs, config: &CalendarToml) -> Result<CalendarDate> {
    let ordinal = if args.unix || config.unix_epoch {
        args.ordinal
            .checked_add(UNIX_EPOCH_ORDINAL)
            .ok_or_else(|| anyhow!("ordinal {} is outside the supported range", args.ordinal))?
    } else {
        args.ordinal
    };
    checked_to_date(ordinal).with_context(|| format!("cannot convert ordinal {}", args.ordinal))
}
