use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::apply_edit;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::{DateEdit, DurationValue, EventWindow, ScheduleEdit};
use crate::ui::messages;
use crate::utils::colors;
use crate::utils::{date, duration};
use serde_json::{Map, Value};
use std::fs;

/// Handle the `reconcile` command: load an entity snapshot, apply the
/// requested field edits one at a time (start, end, duration order) and
/// print or write back the updated snapshot. Fields the schedule does not
/// own are preserved untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reconcile {
        file,
        start,
        clear_start,
        end,
        clear_end,
        duration: duration_input,
        json,
        write,
    } = cmd
    {
        let content = fs::read_to_string(file)?;
        let mut snapshot: Value = serde_json::from_str(&content)?;
        let window: EventWindow = serde_json::from_value(snapshot.clone())?;

        let mut edits: Vec<ScheduleEdit> = Vec::new();

        if *clear_start {
            edits.push(ScheduleEdit::StartDate(DateEdit::Clear));
        } else if let Some(raw) = start {
            let v = date::parse_datetime(raw, &cfg.datetime_format)
                .ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            edits.push(ScheduleEdit::StartDate(DateEdit::Set(v)));
        }

        if *clear_end {
            edits.push(ScheduleEdit::EndDate(DateEdit::Clear));
        } else if let Some(raw) = end {
            let v = date::parse_datetime(raw, &cfg.datetime_format)
                .ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            edits.push(ScheduleEdit::EndDate(DateEdit::Set(v)));
        }

        if let Some(raw) = duration_input {
            // human shorthand first ("1h30m" → 90); anything the parser
            // rejects is handed through raw so the core contract applies
            let edit = match duration::parse_minutes(raw) {
                Some(mins) => ScheduleEdit::Duration(mins.to_string()),
                None => ScheduleEdit::Duration(raw.clone()),
            };
            edits.push(edit);
        }

        if edits.is_empty() {
            messages::warning("No edits given (use --start/--end/--duration or --clear-*)");
            print_window(&window, cfg);
            return Ok(());
        }

        let mut updated = window;
        for edit in &edits {
            updated = apply_edit(&updated, edit);
        }

        merge_window(&mut snapshot, &updated)?;

        let rendered = serde_json::to_string_pretty(&snapshot)?;

        if *write {
            fs::write(file, format!("{}\n", rendered))?;
            messages::success(format!("Snapshot updated: {}", file));
        }

        if *json {
            println!("{}", rendered);
        } else if !*write {
            print_window(&updated, cfg);
            println!("{}", rendered);
        }
    }

    Ok(())
}

/// Fold the reconciled window back into the snapshot; unset fields are
/// removed rather than serialized as null.
fn merge_window(snapshot: &mut Value, window: &EventWindow) -> AppResult<()> {
    let obj = snapshot
        .as_object_mut()
        .ok_or_else(|| AppError::Other("snapshot root is not a JSON object".to_string()))?;

    set_or_remove(obj, "start_date", window.start_date.map(Value::from));
    set_or_remove(obj, "end_date", window.end_date.map(Value::from));

    let duration = match &window.duration {
        Some(d) => Some(serde_json::to_value(d)?),
        None => None,
    };
    set_or_remove(obj, "duration", duration);

    Ok(())
}

fn set_or_remove(obj: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    match value {
        Some(v) => {
            obj.insert(key.to_string(), v);
        }
        None => {
            obj.remove(key);
        }
    }
}

fn print_window(window: &EventWindow, cfg: &Config) {
    let fmt = &cfg.datetime_format;

    let show_date = |v: Option<i64>| match v {
        Some(epoch) => date::format_epoch(epoch, fmt),
        None => colors::dim("-"),
    };

    let dur = match &window.duration {
        Some(DurationValue::Seconds(secs)) => {
            format!("{}s ({})", secs, duration::format_minutes(secs / 60))
        }
        Some(DurationValue::Raw(raw)) => format!("{} {}", raw, colors::bad("(unparsed)")),
        None => colors::dim("-"),
    };

    println!(
        "🗓️  Start: {} | End: {} | Duration: {}",
        show_date(window.start_date),
        show_date(window.end_date),
        dur
    );
}
