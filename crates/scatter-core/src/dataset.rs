// File: crates/scatter-core/src/dataset.rs
// Summary: Named groups of numeric columns loaded from JSON or a CSV directory, plus tabular views.

use std::fs;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::format::{fmt, fmt_opt};

/// Column name → values, in file order.
pub type Columns = IndexMap<String, Vec<f64>>;

/// Group holding the `t_peak_h` / `dt_h` / `duration_h` scalars.
pub const META_GROUP: &str = "meta";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    groups: IndexMap<String, Columns>,
}

impl Dataset {
    pub fn new() -> Self { Self::default() }

    /// Parse `{ "<group>": { "<column>": [numbers or null, ...] } }`.
    /// `null` becomes `NaN`.
    pub fn from_json_str(s: &str) -> ChartResult<Self> {
        let raw: IndexMap<String, IndexMap<String, Vec<Option<f64>>>> = serde_json::from_str(s)?;
        let groups = raw
            .into_iter()
            .map(|(g, cols)| {
                let cols = cols
                    .into_iter()
                    .map(|(c, vals)| (c, vals.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()))
                    .collect();
                (g, cols)
            })
            .collect();
        Ok(Self { groups })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ChartResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// One group from CSV text: header row names the columns, unparsable
    /// cells become `NaN`.
    pub fn read_csv_group<R: Read>(reader: R) -> ChartResult<Columns> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).trim(csv::Trim::All).from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut cols: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
        for record in rdr.records() {
            let record = record?;
            for (i, col) in cols.iter_mut().enumerate() {
                let v = record.get(i).and_then(|cell| cell.parse::<f64>().ok()).unwrap_or(f64::NAN);
                col.push(v);
            }
        }
        Ok(headers.into_iter().zip(cols).collect())
    }

    /// Every `*.csv` in `dir` becomes a group named after the file stem,
    /// in file-name order.
    pub fn from_csv_dir(dir: impl AsRef<Path>) -> ChartResult<Self> {
        let mut files: Vec<_> = fs::read_dir(dir.as_ref())?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")))
            .collect();
        files.sort();

        let mut ds = Self::new();
        for path in files {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else { continue };
            let cols = Self::read_csv_group(fs::File::open(&path)?)?;
            debug!(group = stem, columns = cols.len(), "loaded csv group");
            ds.insert_group(stem, cols);
        }
        Ok(ds)
    }

    /// Directory → CSV groups, anything else → JSON.
    pub fn load(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        if path.is_dir() { Self::from_csv_dir(path) } else { Self::from_json_file(path) }
    }

    pub fn insert_group(&mut self, name: impl Into<String>, columns: Columns) {
        self.groups.insert(name.into(), columns);
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn group(&self, name: &str) -> ChartResult<&Columns> {
        self.groups.get(name).ok_or_else(|| ChartError::MissingGroup(name.to_string()))
    }

    pub fn column(&self, group: &str, name: &str) -> ChartResult<&[f64]> {
        self.group(group)?
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ChartError::MissingColumn { group: group.to_string(), column: name.to_string() })
    }

    /// First value of a column, if present.
    fn scalar(&self, group: &str, name: &str) -> Option<f64> {
        self.column(group, name).ok().and_then(|c| c.first().copied())
    }

    /// `t_peak=…h · dt=…h · duration=…h` from the meta group.
    pub fn meta_summary(&self) -> String {
        let t_peak = self.scalar(META_GROUP, "t_peak_h");
        let dt = self.scalar(META_GROUP, "dt_h");
        let duration = self.scalar(META_GROUP, "duration_h");
        format!("t_peak={}h \u{b7} dt={}h \u{b7} duration={}h", fmt_opt(t_peak), fmt_opt(dt), fmt_opt(duration))
    }

    /// Row-major view of a group. Row count follows the first column;
    /// shorter columns pad with the placeholder.
    pub fn table(&self, group: &str) -> ChartResult<Table> {
        let cols = self.group(group)?;
        let n = cols.values().next().map_or(0, Vec::len);
        let rows = (0..n)
            .map(|i| cols.values().map(|c| c.get(i).map_or_else(|| fmt_opt(None), |v| fmt(*v))).collect())
            .collect();
        Ok(Table { columns: cols.keys().cloned().collect(), rows })
    }
}

/// Formatted cells ready for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Plain-text rendering with right-aligned, space-padded columns.
    pub fn to_text(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{c:>w$}", w = *w))
                .collect::<Vec<_>>()
                .join("  ")
        };
        let mut out = line(&self.columns);
        out.push('\n');
        out.push_str(&widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&line(row));
        }
        out
    }
}
