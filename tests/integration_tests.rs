use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{sq, temp_config, write_snapshot};

#[test]
fn test_query_basic_filters() {
    sq().args([
        "query",
        "--entity",
        "promo-codes",
        "--eq",
        "type=DISCOUNT_CODE",
        "--term",
        "gold",
        "--json",
    ])
    .assert()
    .success()
    .stdout(contains("type==DISCOUNT_CODE"))
    .stdout(contains("code=@gold"))
    .stdout(contains("sponsor_company_name=@gold"));
}

#[test]
fn test_query_multi_value_filter() {
    sq().args([
        "query",
        "--entity",
        "promo-codes",
        "--eq",
        "class_name=1,2",
        "--json",
    ])
    .assert()
    .success()
    .stdout(contains("class_name==1||2"));
}

#[test]
fn test_query_all_sentinel_is_dropped() {
    sq().args(["query", "--entity", "promo-codes", "--eq", "type=ALL", "--json"])
        .assert()
        .success()
        .stdout(contains("type==").not());
}

#[test]
fn test_query_or_mode_wraps_clauses() {
    sq().args([
        "query",
        "--entity",
        "speakers",
        "--eq",
        "type=KEYNOTE",
        "--mode",
        "any",
        "--json",
    ])
    .assert()
    .success()
    .stdout(contains("or(type==KEYNOTE)"));
}

#[test]
fn test_query_selection_status_composite() {
    sq().args([
        "query",
        "--entity",
        "speakers",
        "--selection-status",
        "only_rejected",
        "--json",
    ])
    .assert()
    .success()
    .stdout(contains("has_rejected_presentations==true"))
    .stdout(contains("has_accepted_presentations==false"))
    .stdout(contains("has_alternate_presentations==false"));
}

#[test]
fn test_query_selection_status_fallback() {
    sq().args([
        "query",
        "--entity",
        "speakers",
        "--selection-status",
        "accepted,rejected",
        "--json",
    ])
    .assert()
    .success()
    .stdout(contains(
        "has_accepted_presentations==true,has_rejected_presentations==true",
    ));
}

#[test]
fn test_query_media_upload_type_match_all() {
    sq().args([
        "query",
        "--entity",
        "speakers",
        "--media-upload-type",
        "1,2",
        "--media-match",
        "all",
        "--json",
    ])
    .assert()
    .success()
    .stdout(contains("media_upload_type==1&&2"));
}

#[test]
fn test_query_date_bounds() {
    sq().args([
        "query",
        "--entity",
        "speakers",
        "--from",
        "1970-01-01 00:25",
        "--to",
        "1970-01-01 00:35",
        "--json",
    ])
    .assert()
    .success()
    .stdout(contains("start_date>=1500"))
    .stdout(contains("end_date<=2100"));
}

#[test]
fn test_query_url_preview() {
    let cfg = temp_config("url_preview_absent");

    sq().args([
        "--config",
        &cfg,
        "query",
        "--entity",
        "promo-codes",
        "--eq",
        "type=SPEAKER_CODE",
        "--url",
    ])
    .assert()
    .success()
    .stdout(contains("/promo-codes?filter[]=type==SPEAKER_CODE"))
    .stdout(contains("per_page=10"));
}

#[test]
fn test_query_unknown_entity_fails() {
    sq().args(["query", "--entity", "starships", "--json"])
        .assert()
        .failure()
        .stderr(contains("Unknown entity"));
}

#[test]
fn test_query_malformed_eq_fails() {
    sq().args(["query", "--entity", "promo-codes", "--eq", "=oops", "--json"])
        .assert()
        .failure()
        .stderr(contains("Invalid filter"));
}

#[test]
fn test_fields_lists_entities() {
    sq().args(["fields"])
        .assert()
        .success()
        .stdout(contains("promo-codes"))
        .stdout(contains("email-templates"))
        .stdout(contains("sponsor_company_name"));
}

#[test]
fn test_fields_single_entity() {
    sq().args(["fields", "--entity", "tax-types"])
        .assert()
        .success()
        .stdout(contains("tax-types"))
        .stdout(contains("tax_id"))
        .stdout(contains("promo-codes").not());
}

#[test]
fn test_init_creates_config_file() {
    let cfg = temp_config("init");

    sq().args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("api_base"));
    assert!(content.contains("datetime_format"));
}

#[test]
fn test_config_print_shows_loaded_values() {
    let cfg = temp_config("print");

    sq().args(["--config", &cfg, "init"]).assert().success();

    sq().args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("api_base"))
        .stdout(contains("default_mode"));
}

#[test]
fn test_reconcile_start_edit_updates_duration() {
    let file = write_snapshot(
        "start_edit",
        r#"{"id":42,"title":"Keynote","start_date":1000,"end_date":2000}"#,
    );

    sq().args(["reconcile", "--file", &file, "--start", "1970-01-01 00:25", "--json"])
        .assert()
        .success()
        .stdout(contains("\"start_date\": 1500"))
        .stdout(contains("\"duration\": 500"))
        .stdout(contains("\"title\": \"Keynote\""));
}

#[test]
fn test_reconcile_duration_minutes_moves_end() {
    let file = write_snapshot("duration_edit", r#"{"start_date":1500,"end_date":2000}"#);

    sq().args(["reconcile", "--file", &file, "--duration", "10", "--json"])
        .assert()
        .success()
        .stdout(contains("\"end_date\": 2100"))
        .stdout(contains("\"duration\": 600"));
}

#[test]
fn test_reconcile_clear_start_preserves_the_rest() {
    let file = write_snapshot(
        "clear_start",
        r#"{"start_date":1000,"end_date":2000,"duration":500}"#,
    );

    sq().args(["reconcile", "--file", &file, "--clear-start", "--json"])
        .assert()
        .success()
        .stdout(contains("start_date").not())
        .stdout(contains("\"end_date\": 2000"))
        .stdout(contains("\"duration\": 500"));
}

#[test]
fn test_reconcile_raw_duration_passes_through() {
    let file = write_snapshot("raw_duration", r#"{"start_date":1000,"end_date":2000}"#);

    sq().args(["reconcile", "--file", &file, "--duration", "soonish", "--json"])
        .assert()
        .success()
        .stdout(contains("\"duration\": \"soonish\""))
        .stdout(contains("\"start_date\": 1000"))
        .stdout(contains("\"end_date\": 2000"));
}

#[test]
fn test_reconcile_write_updates_file() {
    let file = write_snapshot("write_back", r#"{"start_date":1500}"#);

    sq().args(["reconcile", "--file", &file, "--duration", "1h", "--write"])
        .assert()
        .success()
        .stdout(contains("Snapshot updated"));

    let content = fs::read_to_string(&file).expect("snapshot readable");
    assert!(content.contains("\"end_date\": 5100"));
    assert!(content.contains("\"duration\": 3600"));
}

#[test]
fn test_reconcile_invalid_date_fails() {
    let file = write_snapshot("bad_date", r#"{"start_date":1000}"#);

    sq().args(["reconcile", "--file", &file, "--start", "not-a-date"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}
