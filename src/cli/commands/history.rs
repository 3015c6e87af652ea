use crate::cli::commands::open_store;
use crate::cli::parser::{Commands, HistoryAction};
use crate::config::Config;
use crate::core::history::History;
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use crate::utils::time::{format_hms, parse_hms};

/// Handle the `history` command and its `set` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::History {
        action,
        format,
        output,
        period,
        no_color,
    } = cmd
    else {
        return Ok(());
    };

    let store = open_store(cfg)?;
    let mut history = History::load(&store, date::today())?;

    if let Some(HistoryAction::Set {
        date: date_str,
        project,
        time,
    }) = action
    {
        let day =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let seconds = parse_hms(time)?;

        history.set_time(day, *project, seconds)?;

        if history.changed_days() == 0 {
            info(format!(
                "{} project #{} unchanged ({})",
                day,
                project,
                format_hms(seconds)
            ));
            return Ok(());
        }

        if cfg.read_only {
            warning("Read-only mode: change not saved");
            return Ok(());
        }

        if history.save_changed(&store) > 0 {
            success(format!(
                "{} project #{} set to {}",
                day,
                project,
                format_hms(seconds)
            ));
        } else {
            warning(format!("{} project #{} was not saved", day, project));
        }
        return Ok(());
    }

    if let Some(p) = period {
        let (from, to) = date::resolve_range(p).map_err(AppError::InvalidArgument)?;
        history.retain_between(from, to);
    }

    if history.is_empty() {
        info("No history recorded yet");
        return Ok(());
    }

    match output {
        Some(file) => export::write_to(&history, *format, &expand_tilde(file))?,
        None => {
            if *format == ExportFormat::Table {
                header("History");
            }
            let rendered = export::render(&history, *format, !*no_color)?;
            println!("{}", rendered);
        }
    }

    Ok(())
}
