// File: crates/tidyviz-core/src/load.rs
// Summary: Loader stage; one blocking GET per source and header-driven CSV parsing.

use std::io::Read;

use tracing::{debug, info};

use crate::config::FetchOptions;
use crate::error::{PipelineError, Result};
use crate::record::{EventKind, LifeEvent, ProductionRecord};

/// Download `url` as text. Single attempt, no caching.
pub fn fetch_text(url: &str, opts: &FetchOptions) -> Result<String> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(opts.timeout))
        .build()
        .into();

    info!("fetching {url}");
    let response = agent.get(url).call().map_err(|err| PipelineError::Fetch {
        url: url.to_string(),
        reason: err.to_string(),
    })?;

    let mut body = String::new();
    response
        .into_body()
        .into_reader()
        .read_to_string(&mut body)
        .map_err(|err| PipelineError::Fetch {
            url: url.to_string(),
            reason: format!("failed reading body: {err}"),
        })?;
    debug!("fetched {} bytes from {url}", body.len());
    Ok(body)
}

/// Fetch and parse births.csv or deaths.csv.
pub fn fetch_life_events(url: &str, kind: EventKind, opts: &FetchOptions) -> Result<Vec<LifeEvent>> {
    let body = fetch_text(url, opts)?;
    let events = read_life_events(body.as_bytes(), url, kind)?;
    info!("loaded {} {} rows", events.len(), kind);
    Ok(events)
}

/// Fetch and parse emissions.csv.
pub fn fetch_production(url: &str, opts: &FetchOptions) -> Result<Vec<ProductionRecord>> {
    let body = fetch_text(url, opts)?;
    let records = read_production(body.as_bytes(), url)?;
    info!("loaded {} production rows", records.len());
    Ok(records)
}

/// Parse leap-day rows. The kind's year column (`year_birth` / `year_death`) becomes `year`.
/// `source` only labels error messages.
pub fn read_life_events<R: Read>(reader: R, source: &str, kind: EventKind) -> Result<Vec<LifeEvent>> {
    let mut table = Table::open(reader, source)?;
    let i_person = table.column("person")?;
    let i_description = table.column("description")?;
    let i_year = table.column(kind.year_column())?;

    let mut out = Vec::new();
    for (row, rec) in table.rows.records().enumerate() {
        let rec = rec.map_err(|err| unparsable(source, err))?;
        let year = parse_cell::<i32>(&rec, i_year, row, kind.year_column())?;
        out.push(LifeEvent {
            person: rec.get(i_person).unwrap_or_default().to_string(),
            description: rec.get(i_description).unwrap_or_default().to_string(),
            year,
            kind,
        });
    }
    Ok(out)
}

/// Parse emissions rows, keeping year, commodity and production_value.
pub fn read_production<R: Read>(reader: R, source: &str) -> Result<Vec<ProductionRecord>> {
    let mut table = Table::open(reader, source)?;
    let i_year = table.column("year")?;
    let i_commodity = table.column("commodity")?;
    let i_value = table.column("production_value")?;

    let mut out = Vec::new();
    for (row, rec) in table.rows.records().enumerate() {
        let rec = rec.map_err(|err| unparsable(source, err))?;
        out.push(ProductionRecord {
            year: parse_cell::<i32>(&rec, i_year, row, "year")?,
            commodity: rec.get(i_commodity).unwrap_or_default().to_string(),
            production_value: parse_finite(&rec, i_value, row, "production_value")?,
        });
    }
    Ok(out)
}

// ---- helpers ----------------------------------------------------------------

struct Table<R> {
    rows: csv::Reader<R>,
    headers: Vec<String>,
    source: String,
}

impl<R: Read> Table<R> {
    fn open(reader: R, source: &str) -> Result<Self> {
        let mut rows = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = rows
            .headers()
            .map_err(|err| unparsable(source, err))?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect::<Vec<_>>();
        debug!("headers of {source}: {headers:?}");
        Ok(Self { rows, headers, source: source.to_string() })
    }

    fn column(&self, name: &str) -> Result<usize> {
        self.headers.iter().position(|h| h == name).ok_or_else(|| {
            PipelineError::Schema(format!("column '{name}' missing from {}", self.source))
        })
    }
}

fn parse_cell<T: std::str::FromStr>(rec: &csv::StringRecord, idx: usize, row: usize, column: &str) -> Result<T> {
    let raw = rec.get(idx).unwrap_or_default().trim();
    raw.parse::<T>().map_err(|_| {
        // +2: header line plus 1-based numbering
        PipelineError::Schema(format!("row {}: column '{column}' has non-numeric value '{raw}'", row + 2))
    })
}

/// `f64::from_str` accepts `NaN` and `inf`; those would poison any sum they join.
fn parse_finite(rec: &csv::StringRecord, idx: usize, row: usize, column: &str) -> Result<f64> {
    let value = parse_cell::<f64>(rec, idx, row, column)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PipelineError::Schema(format!("row {}: column '{column}' has non-finite value '{value}'", row + 2)))
    }
}

fn unparsable(source: &str, err: csv::Error) -> PipelineError {
    PipelineError::Fetch { url: source.to_string(), reason: format!("payload is not valid CSV: {err}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRTHS: &str = "year_birth,person,description,year_death\n\
        1468,Pope Paul III,Pope,1549\n\
        1904,Jimmy Dorsey,American musician,1957\n";

    #[test]
    fn renames_year_column() {
        let rows = read_life_events(BIRTHS.as_bytes(), "births", EventKind::Birth).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].year, 1904);
        assert_eq!(rows[1].person, "Jimmy Dorsey");
        assert_eq!(rows[1].kind, EventKind::Birth);
    }

    #[test]
    fn year_column_follows_kind() {
        let rows = read_life_events(BIRTHS.as_bytes(), "births", EventKind::Death).unwrap();
        assert_eq!(rows[0].year, 1549);
        assert_eq!(rows[0].kind, EventKind::Death);
    }

    #[test]
    fn missing_column_is_schema_error() {
        let csv = "year_death,person\n1904,Someone\n";
        let err = read_life_events(csv.as_bytes(), "deaths", EventKind::Death).unwrap_err();
        assert!(matches!(err, PipelineError::Schema(ref msg) if msg.contains("description")));
    }

    #[test]
    fn non_numeric_value_is_schema_error() {
        let csv = "year,commodity,production_value\n1950,Lignite Coal,lots\n";
        let err = read_production(csv.as_bytes(), "emissions").unwrap_err();
        assert!(matches!(err, PipelineError::Schema(ref msg) if msg.contains("row 2")));
    }

    #[test]
    fn non_finite_value_is_schema_error() {
        for bad in ["NaN", "inf", "-infinity"] {
            let csv = format!("year,commodity,production_value\n1951,Lignite Coal,200\n1950,Lignite Coal,{bad}\n");
            let err = read_production(csv.as_bytes(), "emissions").unwrap_err();
            assert!(
                matches!(err, PipelineError::Schema(ref msg) if msg.contains("row 3") && msg.contains("production_value")),
                "{bad} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn ragged_row_is_fetch_error() {
        let csv = "year,commodity,production_value\n1950,Lignite Coal\n";
        let err = read_production(csv.as_bytes(), "emissions").unwrap_err();
        assert!(matches!(err, PipelineError::Fetch { ref url, ref reason } if url == "emissions" && reason.contains("not valid CSV")));
    }

    #[test]
    fn unreachable_host_is_fetch_error() {
        let opts = FetchOptions { timeout: std::time::Duration::from_secs(1) };
        let err = fetch_text("http://127.0.0.1:9/births.csv", &opts).unwrap_err();
        assert!(matches!(err, PipelineError::Fetch { ref url, .. } if url.ends_with("births.csv")));
    }
}
