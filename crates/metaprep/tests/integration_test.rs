//! Integration tests for metaprep.

use std::io::Write;
use tempfile::NamedTempFile;

use metaprep::{
    output, report, text, MetaprepError, Parser, Pipeline, PipelineConfig, SummaryConfig,
    TokenConfig,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// Full Pipeline Tests
// =============================================================================

#[test]
fn test_five_row_scenario() {
    // 5 rows, 2 with a null publish_time: the cleaned table keeps exactly 3.
    let content = "title,abstract,authors,journal,publish_time,license\n\
                   Paper A,First abstract,A;B,Nature,2020-01-15,cc-by\n\
                   Paper B,,Solo,Lancet,2020-02-20,cc-by\n\
                   Paper C,Third abstract,C,Nature,,mit\n\
                   Paper D,Fourth abstract,D;E;F,BMJ,2021-03-10,cc-by\n\
                   Paper E,Fifth abstract,G,Cell,,mit\n";
    let file = create_test_file(content);

    let pipeline = Pipeline::new();
    let (result, source) = pipeline.process_file(file.path()).expect("pipeline failed");

    assert_eq!(source.row_count, 5);
    assert_eq!(result.rows_dropped, 2);
    assert_eq!(result.table.row_count(), 3);

    let year_idx = result.table.column_index("publish_year").unwrap();
    let abstract_idx = result.table.column_index("abstract").unwrap();
    let authors_idx = result.table.column_index("authors").unwrap();

    for row in result.table.rows() {
        assert!(!row[abstract_idx].is_null());
        assert!(!row[authors_idx].is_null());
        assert!(row[year_idx].as_integer().is_some());
    }
}

#[test]
fn test_sparse_column_pruned() {
    // "sra_accession" is missing in 4 of 5 rows (80% > 70% threshold).
    let content = "title,abstract,authors,publish_time,sra_accession\n\
                   A,x,a,2020-01-01,\n\
                   B,x,b,2020-01-02,\n\
                   C,x,c,2020-01-03,SRR1\n\
                   D,x,d,2020-01-04,\n\
                   E,x,e,2020-01-05,\n";
    let file = create_test_file(content);

    let (result, _) = Pipeline::new().process_file(file.path()).unwrap();

    assert_eq!(result.dropped_columns, vec!["sra_accession".to_string()]);
    assert!(result.table.column_index("sra_accession").is_none());
    assert_eq!(result.table.row_count(), 5);
}

#[test]
fn test_imputation_defaults() {
    // Only the first row has blanks; the filled rows keep the abstract and
    // authors columns below the pruning threshold.
    let content = "title,abstract,authors,publish_time\n\
                   A,,,2020-01-01\n\
                   B,Second abstract,X;Y,2020-01-02\n\
                   C,Third abstract,Z,2020-01-03\n";
    let file = create_test_file(content);

    let (result, _) = Pipeline::new().process_file(file.path()).unwrap();

    assert!(result.dropped_columns.is_empty());
    let abstract_idx = result.table.column_index("abstract").unwrap();
    let authors_idx = result.table.column_index("authors").unwrap();
    assert_eq!(result.table.get(0, abstract_idx).unwrap().as_text(), Some(""));
    assert_eq!(
        result.table.get(0, authors_idx).unwrap().as_text(),
        Some("Unknown")
    );

    let wc_idx = result.table.column_index("abstract_word_count").unwrap();
    let ac_idx = result.table.column_index("author_count").unwrap();
    assert_eq!(result.table.get(0, wc_idx).unwrap().as_integer(), Some(0));
    assert_eq!(result.table.get(0, ac_idx).unwrap().as_integer(), Some(1));
}

#[test]
fn test_mixed_date_formats_normalized() {
    let content = "title,abstract,authors,publish_time\n\
                   A,x,a,2020-01-15\n\
                   B,x,b,2020 Dec\n\
                   C,x,c,2019\n\
                   D,x,d,Mar 5, 2021\n";
    // The month-name form carries a comma, so it must be quoted.
    let content = content.replace("Mar 5, 2021", "\"Mar 5, 2021\"");
    let file = create_test_file(&content);

    let (result, _) = Pipeline::new().process_file(file.path()).unwrap();

    assert_eq!(result.table.row_count(), 4);
    let year_idx = result.table.column_index("publish_year").unwrap();
    let years: Vec<i64> = result
        .table
        .column_values(year_idx)
        .map(|v| v.as_integer().unwrap())
        .collect();
    assert_eq!(years, vec![2020, 2020, 2019, 2021]);
}

#[test]
fn test_missing_required_column_is_fatal() {
    // No "abstract" column at all: imputation cannot proceed.
    let content = "title,authors,publish_time\nA,a,2020-01-01\n";
    let file = create_test_file(content);

    let err = Pipeline::new().process_file(file.path()).unwrap_err();
    assert!(matches!(err, MetaprepError::MissingColumn(c) if c == "abstract"));
}

#[test]
fn test_ragged_input_is_fatal() {
    let content = "title,abstract,authors,publish_time\nA,x,a\n";
    let file = create_test_file(content);

    let err = Pipeline::new().process_file(file.path()).unwrap_err();
    assert!(matches!(err, MetaprepError::MalformedInput { .. }));
}

#[test]
fn test_empty_result_is_not_an_error() {
    // Every row fails the date filter; the cleaned table is empty but valid.
    let content = "title,abstract,authors,publish_time\n\
                   A,x,a,not-a-date\n\
                   B,y,b,\n";
    let file = create_test_file(content);

    let (result, _) = Pipeline::new().process_file(file.path()).unwrap();

    assert_eq!(result.table.row_count(), 0);
    assert_eq!(result.rows_dropped, 2);

    // The reporter handles the empty table with zero counts.
    let config = SummaryConfig {
        categorical_column: "title".to_string(),
        presence_column: "abstract".to_string(),
        keyword: "anything".to_string(),
        keyword_columns: vec!["abstract".to_string()],
    };
    let summary = report::summarize(&result.table, &config).unwrap();
    assert_eq!(summary.rows, 0);
    assert_eq!(summary.keyword_matches, 0);
}

#[test]
fn test_custom_threshold() {
    // At threshold 0.0 any column with a single missing value is pruned.
    let content = "title,abstract,authors,publish_time,journal\n\
                   A,x,a,2020-01-01,Nature\n\
                   B,y,b,2020-01-02,\n";
    let file = create_test_file(content);

    let config = PipelineConfig {
        missing_threshold: 0.0,
        ..PipelineConfig::default()
    };
    let (result, _) = Pipeline::with_config(config).process_file(file.path()).unwrap();

    assert_eq!(result.dropped_columns, vec!["journal".to_string()]);
}

// =============================================================================
// Aggregation Tests
// =============================================================================

fn cleaned_fixture() -> metaprep::Table {
    let content = "title,abstract,authors,journal,publish_time\n\
                   COVID-19 vaccine efficacy,We measure efficacy of a COVID-19 vaccine.,A;B,Nature,2020-06-01\n\
                   Influenza season review,A look back at influenza.,C,Lancet,2019-10-01\n\
                   Long covid-19 outcomes,,D;E,Nature,2021-01-15\n";
    let file = create_test_file(content);
    let (result, _) = Pipeline::new().process_file(file.path()).unwrap();
    result.table
}

#[test]
fn test_keyword_filter_case_insensitive_end_to_end() {
    let table = cleaned_fixture();

    let lower = text::filter_by_keyword(&table, "covid-19", &["title"]).unwrap();
    let upper = text::filter_by_keyword(&table, "COVID-19", &["title"]).unwrap();

    assert_eq!(lower.row_count(), 2);
    assert_eq!(lower, upper);
}

#[test]
fn test_summary_record() {
    let table = cleaned_fixture();
    let summary = report::summarize(&table, &SummaryConfig::for_keyword("covid-19")).unwrap();

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.distinct_categories, 2);
    assert_eq!(summary.with_presence, 2);
    assert_eq!(summary.without_presence, 1);
    assert_eq!(summary.keyword_matches, 1);
}

#[test]
fn test_token_frequency_end_to_end() {
    let table = cleaned_fixture();
    let tokens = text::token_frequency(&table, "title", &TokenConfig::default()).unwrap();

    // "covid19" appears in two titles after normalization.
    assert_eq!(tokens[0].0, "covid19");
    assert_eq!(tokens[0].1, 2);
    // Determinism across repeated runs.
    let again = text::token_frequency(&table, "title", &TokenConfig::default()).unwrap();
    assert_eq!(tokens, again);
}

#[test]
fn test_value_counts_top_journals() {
    let table = cleaned_fixture();
    let ranked = report::value_counts(&table, "journal").unwrap();

    assert_eq!(ranked[0], ("Nature".to_string(), 2));
    assert_eq!(ranked[1], ("Lancet".to_string(), 1));
}

#[test]
fn test_year_distribution() {
    let table = cleaned_fixture();
    let dist = report::year_distribution(&table, "publish_year").unwrap();

    assert_eq!(dist, vec![(2019, 1), (2020, 1), (2021, 1)]);
}

// =============================================================================
// Output Artifact Tests
// =============================================================================

#[test]
fn test_cleaned_table_round_trip() {
    let table = cleaned_fixture();

    let out = NamedTempFile::new().unwrap();
    output::write_table(&table, out.path()).unwrap();

    let parser = Parser::new();
    let (reparsed, _) = parser.parse_file(out.path()).unwrap();

    assert_eq!(reparsed.row_count(), table.row_count());
    assert_eq!(reparsed.columns(), table.columns());
}

#[test]
fn test_summary_artifact() {
    let table = cleaned_fixture();
    let summary = report::summarize(&table, &SummaryConfig::for_keyword("covid-19")).unwrap();

    let out = NamedTempFile::new().unwrap();
    output::write_summary(&summary, out.path()).unwrap();

    let written = std::fs::read_to_string(out.path()).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("rows"));
    assert!(lines[0].contains("keyword_matches"));
    assert!(lines[1].starts_with("3,"));
}

#[test]
fn test_token_frequency_artifact() {
    let table = cleaned_fixture();
    let tokens = text::token_frequency(&table, "title", &TokenConfig::default()).unwrap();

    let out = NamedTempFile::new().unwrap();
    output::write_token_frequency(&tokens, out.path()).unwrap();

    let written = std::fs::read_to_string(out.path()).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "token,count");
    assert_eq!(lines.len(), tokens.len() + 1);
    assert!(lines[1].starts_with("covid19,"));
}

// =============================================================================
// Source Metadata Tests
// =============================================================================

#[test]
fn test_source_hash_is_stable() {
    let content = "title,abstract,authors,publish_time\nA,x,a,2020-01-01\n";
    let file = create_test_file(content);

    let pipeline = Pipeline::new();
    let (_, first) = pipeline.process_file(file.path()).unwrap();
    let (_, second) = pipeline.process_file(file.path()).unwrap();

    assert!(first.hash.starts_with("sha256:"));
    assert_eq!(first.hash, second.hash);
}

#[test]
fn test_tsv_auto_detect() {
    let content = "title\tabstract\tauthors\tpublish_time\n\
                   A\tx\ta\t2020-01-01\n";
    let file = create_test_file(content);

    let (_, source) = Pipeline::new().process_file(file.path()).unwrap();
    assert_eq!(source.format, "tsv");
}
