use summitq::core::query::{FilterOperator, build_query, escape_term, wrap_or};
use summitq::errors::AppError;
use summitq::models::entity::EntityKind;
use summitq::models::filter::{ALL, Filter, FilterMode, FilterOption, FilterSet};
use summitq::models::selection::SelectionStatus;

fn ids(values: &[&str]) -> Vec<FilterOption> {
    values.iter().map(|v| FilterOption::new(*v)).collect()
}

#[test]
fn test_escape_term_delimiters() {
    assert_eq!(escape_term("a,b;c"), "a\\,b\\;c");
}

#[test]
fn test_escape_term_empty_unchanged() {
    assert_eq!(escape_term(""), "");
    assert_eq!(escape_term("plain"), "plain");
}

#[test]
fn test_escape_term_is_not_idempotent() {
    let once = escape_term("a,b");
    let twice = escape_term(&once);
    assert_ne!(once, twice);
    assert_eq!(twice, "a\\\\,b");
}

#[test]
fn test_all_sentinel_and_empty_filters_contribute_nothing() {
    let set = FilterSet::new()
        .with(Filter::Scalar {
            field: "type".to_string(),
            value: ALL.to_string(),
        })
        .with(Filter::Scalar {
            field: "owner".to_string(),
            value: String::new(),
        })
        .with(Filter::IdList {
            field: "tags".to_string(),
            options: Vec::new(),
        })
        .with(Filter::WithOperator {
            field: "media_upload_type".to_string(),
            operator: FilterOperator::Equal,
            values: Vec::new(),
            match_all: false,
        })
        .with(Filter::SelectionStatus {
            statuses: Vec::new(),
        });

    let clauses = build_query(&set, None, &[]).expect("build");
    assert!(clauses.is_empty());
}

#[test]
fn test_scalar_filter_single_clause() {
    let set = FilterSet::new().with(Filter::Scalar {
        field: "type".to_string(),
        value: "DISCOUNT_CODE".to_string(),
    });

    let clauses = build_query(&set, None, &[]).expect("build");
    assert_eq!(clauses, vec!["type==DISCOUNT_CODE".to_string()]);
}

#[test]
fn test_id_list_joins_with_or_separator() {
    let set = FilterSet::new().with(Filter::IdList {
        field: "class_name".to_string(),
        options: ids(&["1", "2"]),
    });

    let clauses = build_query(&set, None, &[]).expect("build");
    assert_eq!(clauses, vec!["class_name==1||2".to_string()]);
}

#[test]
fn test_wrap_or_wraps_every_clause_in_any_mode() {
    let rendered = vec!["a==1".to_string(), "b==2".to_string()];
    let wrapped = wrap_or(rendered, FilterMode::Any);
    assert_eq!(
        wrapped,
        vec!["or(a==1)".to_string(), "or(b==2)".to_string()]
    );
}

#[test]
fn test_wrap_or_is_identity_in_all_mode() {
    let rendered = vec!["a==1".to_string(), "b==2".to_string()];
    let wrapped = wrap_or(rendered.clone(), FilterMode::All);
    assert_eq!(wrapped, rendered);
}

#[test]
fn test_any_mode_applies_to_whole_query() {
    let set = FilterSet::new()
        .with_mode(FilterMode::Any)
        .with(Filter::Scalar {
            field: "type".to_string(),
            value: "SPEAKER".to_string(),
        })
        .with(Filter::IdList {
            field: "tags".to_string(),
            options: ids(&["7", "9"]),
        });

    let clauses = build_query(&set, None, &[]).expect("build");
    assert_eq!(
        clauses,
        vec!["or(type==SPEAKER)".to_string(), "or(tags==7||9)".to_string()]
    );
}

#[test]
fn test_selection_status_composite_expands_through_table() {
    let set = FilterSet::new().with(Filter::SelectionStatus {
        statuses: vec![SelectionStatus::OnlyRejected],
    });

    let clauses = build_query(&set, None, &[]).expect("build");
    assert_eq!(
        clauses,
        vec![
            "has_rejected_presentations==true".to_string(),
            "has_accepted_presentations==false".to_string(),
            "has_alternate_presentations==false".to_string(),
        ]
    );
}

#[test]
fn test_selection_status_every_composite_yields_three_clauses() {
    let composites = [
        SelectionStatus::OnlyAccepted,
        SelectionStatus::OnlyRejected,
        SelectionStatus::OnlyAlternate,
        SelectionStatus::AcceptedAlternate,
        SelectionStatus::AcceptedRejected,
        SelectionStatus::AlternateRejected,
    ];

    for status in composites {
        let set = FilterSet::new().with(Filter::SelectionStatus {
            statuses: vec![status],
        });
        let clauses = build_query(&set, None, &[]).expect("build");
        assert_eq!(clauses.len(), 3, "composite {:?}", status);
        assert!(clauses.iter().all(|c| c.contains("_presentations==")));
    }
}

#[test]
fn test_selection_status_combination_degrades_to_grouped_clause() {
    let set = FilterSet::new().with(Filter::SelectionStatus {
        statuses: vec![SelectionStatus::Accepted, SelectionStatus::Rejected],
    });

    let clauses = build_query(&set, None, &[]).expect("build");
    assert_eq!(
        clauses,
        vec!["has_accepted_presentations==true,has_rejected_presentations==true".to_string()]
    );
}

#[test]
fn test_selection_status_composite_mixed_with_plain_degrades() {
    let set = FilterSet::new().with(Filter::SelectionStatus {
        statuses: vec![SelectionStatus::OnlyRejected, SelectionStatus::Accepted],
    });

    let clauses = build_query(&set, None, &[]).expect("build");
    assert_eq!(
        clauses,
        vec![
            "has_only_rejected_presentations==true,has_accepted_presentations==true".to_string()
        ]
    );
}

#[test]
fn test_media_upload_type_joins_follow_match_semantics() {
    let any = FilterSet::new().with(Filter::WithOperator {
        field: "media_upload_type".to_string(),
        operator: FilterOperator::Equal,
        values: vec!["1".to_string(), "2".to_string()],
        match_all: false,
    });
    let all = FilterSet::new().with(Filter::WithOperator {
        field: "media_upload_type".to_string(),
        operator: FilterOperator::Equal,
        values: vec!["1".to_string(), "2".to_string()],
        match_all: true,
    });

    assert_eq!(
        build_query(&any, None, &[]).expect("build"),
        vec!["media_upload_type==1||2".to_string()]
    );
    assert_eq!(
        build_query(&all, None, &[]).expect("build"),
        vec!["media_upload_type==1&&2".to_string()]
    );
}

#[test]
fn test_date_bounds_use_comparison_operators() {
    let set = FilterSet::new()
        .with(Filter::DateFrom {
            field: "start_date".to_string(),
            value: 1000,
        })
        .with(Filter::DateTo {
            field: "end_date".to_string(),
            value: 2000,
        });

    let clauses = build_query(&set, None, &[]).expect("build");
    assert_eq!(
        clauses,
        vec!["start_date>=1000".to_string(), "end_date<=2000".to_string()]
    );
}

#[test]
fn test_term_searches_across_entity_fields() {
    let fields = EntityKind::PromoCodes.searchable_fields();
    let clauses = build_query(&FilterSet::new(), Some("gold"), fields).expect("build");

    let expected = fields
        .iter()
        .map(|f| format!("{}=@gold", f))
        .collect::<Vec<_>>()
        .join(",");
    assert_eq!(clauses, vec![expected]);
}

#[test]
fn test_term_is_escaped_exactly_once() {
    let clauses =
        build_query(&FilterSet::new(), Some("a,b"), &["code", "owner"]).expect("build");
    assert_eq!(clauses, vec!["code=@a\\,b,owner=@a\\,b".to_string()]);
}

#[test]
fn test_blank_term_contributes_nothing() {
    let clauses = build_query(&FilterSet::new(), Some("   "), &["code"]).expect("build");
    assert!(clauses.is_empty());
}

#[test]
fn test_clause_order_follows_insertion_order_with_term_last() {
    let set = FilterSet::new()
        .with(Filter::IdList {
            field: "tags".to_string(),
            options: ids(&["3"]),
        })
        .with(Filter::Scalar {
            field: "type".to_string(),
            value: "KEYNOTE".to_string(),
        });

    let clauses = build_query(&set, Some("ada"), &["full_name"]).expect("build");
    assert_eq!(
        clauses,
        vec![
            "tags==3".to_string(),
            "type==KEYNOTE".to_string(),
            "full_name=@ada".to_string(),
        ]
    );
}

#[test]
fn test_empty_field_name_fails_loudly() {
    let set = FilterSet::new().with(Filter::Scalar {
        field: "  ".to_string(),
        value: "x".to_string(),
    });

    let err = build_query(&set, None, &[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidFilter(_)));
}

#[test]
fn test_option_without_id_fails_loudly() {
    let set = FilterSet::new().with(Filter::IdList {
        field: "tags".to_string(),
        options: ids(&["1", ""]),
    });

    let err = build_query(&set, None, &[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidFilter(_)));
}

#[test]
fn test_term_without_searchable_fields_fails_loudly() {
    let err = build_query(&FilterSet::new(), Some("gold"), &[]).unwrap_err();
    assert!(matches!(err, AppError::InvalidFilter(_)));
}
