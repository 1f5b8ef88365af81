// File: crates/scatter-core/tests/dataset.rs
// Purpose: JSON/CSV dataset loading, column lookup, meta summary and tables.

use scatter_core::{ChartError, Dataset};

const SAMPLE: &str = r#"{
  "meta": { "t_peak_h": [12.5], "dt_h": [0.1], "duration_h": [48] },
  "culture": { "psi0": [0.2, 0.8], "M_r_final": [0.41, null] },
  "sensitivity": { "alpha_E": [0.5, 1.0, 1.5], "H_e_final": [0.9, 0.7] }
}"#;

#[test]
fn json_groups_keep_order_and_nulls_become_nan() {
    let ds = Dataset::from_json_str(SAMPLE).expect("parse");
    assert_eq!(ds.group_names().collect::<Vec<_>>(), vec!["meta", "culture", "sensitivity"]);
    let m = ds.column("culture", "M_r_final").unwrap();
    assert_eq!(m[0], 0.41);
    assert!(m[1].is_nan());
}

#[test]
fn missing_group_and_column_are_typed_errors() {
    let ds = Dataset::from_json_str(SAMPLE).unwrap();
    assert!(matches!(ds.column("routine", "E"), Err(ChartError::MissingGroup(g)) if g == "routine"));
    assert!(matches!(
        ds.column("culture", "nope"),
        Err(ChartError::MissingColumn { group, column }) if group == "culture" && column == "nope"
    ));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(Dataset::from_json_str("{\"g\": [1, 2]}"), Err(ChartError::Json(_))));
}

#[test]
fn meta_summary_formats_scalars() {
    let ds = Dataset::from_json_str(SAMPLE).unwrap();
    assert_eq!(ds.meta_summary(), "t_peak=12.50h \u{b7} dt=0.100h \u{b7} duration=48.00h");
    assert_eq!(Dataset::new().meta_summary(), "t_peak=\u{2013}h \u{b7} dt=\u{2013}h \u{b7} duration=\u{2013}h");
}

#[test]
fn table_rows_follow_first_column() {
    let ds = Dataset::from_json_str(SAMPLE).unwrap();
    let t = ds.table("sensitivity").unwrap();
    assert_eq!(t.columns, vec!["alpha_E", "H_e_final"]);
    assert_eq!(t.rows.len(), 3);
    assert_eq!(t.rows[0], vec!["0.500", "0.900"]);
    assert_eq!(t.rows[2], vec!["1.500", "\u{2013}"]);

    let culture = ds.table("culture").unwrap();
    assert_eq!(culture.rows[1], vec!["0.800", "\u{2013}"]);

    let text = t.to_text();
    assert_eq!(text.lines().count(), 5);
    assert!(text.lines().next().unwrap().contains("H_e_final"));
}

#[test]
fn csv_group_parses_headers_and_bad_cells() {
    let csv = "time_s,E,C\n0,0.1,0.5\n1, 0.2 ,n/a\n2,0.3,0.7\n";
    let cols = Dataset::read_csv_group(csv.as_bytes()).expect("csv");
    assert_eq!(cols.keys().collect::<Vec<_>>(), vec!["time_s", "E", "C"]);
    assert_eq!(cols["E"], vec![0.1, 0.2, 0.3]);
    assert!(cols["C"][1].is_nan());
}

#[test]
fn csv_directory_becomes_groups() {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("dataset_csv");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("routine.csv"), "time_s,M_r\n0,0.1\n1,0.3\n").unwrap();
    std::fs::write(dir.join("meta.csv"), "t_peak_h,dt_h,duration_h\n6,0.05,24\n").unwrap();
    std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let ds = Dataset::load(&dir).expect("load dir");
    assert_eq!(ds.group_names().collect::<Vec<_>>(), vec!["meta", "routine"]);
    assert_eq!(ds.column("routine", "M_r").unwrap(), &[0.1, 0.3]);
    assert_eq!(ds.meta_summary(), "t_peak=6.000h \u{b7} dt=0.050h \u{b7} duration=24.00h");
}
