use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::{self, FilterOperator};
use crate::errors::{AppError, AppResult};
use crate::models::entity::EntityKind;
use crate::models::filter::{Filter, FilterMode, FilterOption, FilterSet};
use crate::models::selection::SelectionStatus;
use crate::ui::messages;
use crate::utils::colors;
use crate::utils::date;

/// Handle the `query` command: fold the CLI flags into a `FilterSet`,
/// build the clause list and print it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Query {
        entity,
        eq,
        term,
        mode,
        from,
        to,
        from_field,
        to_field,
        selection_status,
        media_upload_type,
        media_match,
        json,
        url,
    } = cmd
    {
        let kind = EntityKind::from_param(entity)
            .ok_or_else(|| AppError::UnknownEntity(entity.clone()))?;

        let mode = match mode {
            Some(m) => FilterMode::from_param(m).ok_or_else(|| AppError::InvalidMode(m.clone()))?,
            None => cfg.mode(),
        };

        let mut set = FilterSet::new().with_mode(mode);

        // flags are folded in a fixed order; clause order follows it
        for raw in eq {
            set.push(parse_eq(raw)?);
        }

        if let Some(raw) = selection_status {
            let statuses = split_values(raw)
                .into_iter()
                .map(|s| {
                    SelectionStatus::from_param(&s)
                        .ok_or_else(|| AppError::InvalidSelectionStatus(s.clone()))
                })
                .collect::<AppResult<Vec<_>>>()?;
            set.push(Filter::SelectionStatus { statuses });
        }

        if let Some(raw) = media_upload_type {
            let match_all = match media_match.as_str() {
                "all" => true,
                "any" => false,
                other => {
                    return Err(AppError::InvalidFilter(format!(
                        "--media-match must be 'any' or 'all', got '{}'",
                        other
                    )));
                }
            };
            set.push(Filter::WithOperator {
                field: "media_upload_type".to_string(),
                operator: FilterOperator::Equal,
                values: split_values(raw),
                match_all,
            });
        }

        if let Some(raw) = from {
            let value = date::parse_datetime(raw, &cfg.datetime_format)
                .ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            set.push(Filter::DateFrom {
                field: from_field.clone(),
                value,
            });
        }

        if let Some(raw) = to {
            let value = date::parse_datetime(raw, &cfg.datetime_format)
                .ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            set.push(Filter::DateTo {
                field: to_field.clone(),
                value,
            });
        }

        let clauses = query::build_query(&set, term.as_deref(), kind.searchable_fields())?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&clauses)?);
        } else if *url {
            println!("{}", url_preview(cfg, kind, &clauses));
        } else {
            messages::info(format!(
                "{} filter clause(s) for {}",
                clauses.len(),
                kind.label()
            ));
            for clause in &clauses {
                println!("  filter[]={}", colors::clause(clause));
            }
            if clauses.is_empty() {
                println!("  {}", colors::dim("(no filters; the listing is unfiltered)"));
            }
        }
    }

    Ok(())
}

/// `FIELD=VALUES` → a scalar filter (single value) or an id-list filter
/// (comma-separated values).
fn parse_eq(raw: &str) -> AppResult<Filter> {
    let (field, values) = raw
        .split_once('=')
        .ok_or_else(|| AppError::InvalidFilter(format!("expected FIELD=VALUES, got '{}'", raw)))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(AppError::InvalidFilter(format!(
            "missing field name in '{}'",
            raw
        )));
    }

    let vals = split_values(values);
    if vals.len() > 1 {
        Ok(Filter::IdList {
            field: field.to_string(),
            options: vals.into_iter().map(FilterOption::new).collect(),
        })
    } else {
        Ok(Filter::Scalar {
            field: field.to_string(),
            value: vals.into_iter().next().unwrap_or_default(),
        })
    }
}

fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

/// Request-URL preview. Percent-encoding is the transport helper's job;
/// the preview shows the parameters verbatim.
fn url_preview(cfg: &Config, kind: EntityKind, clauses: &[String]) -> String {
    let mut params: Vec<String> = clauses.iter().map(|c| format!("filter[]={}", c)).collect();
    params.push("page=1".to_string());
    params.push(format!("per_page={}", cfg.per_page));

    format!(
        "{}/{}?{}",
        cfg.api_base.trim_end_matches('/'),
        kind.api_path(),
        params.join("&")
    )
}
