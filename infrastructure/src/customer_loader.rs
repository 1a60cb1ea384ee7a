use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use domain::customer::{CustomerRecord, REQUIRED_COLUMNS};
use shared::error::{AgentError, AgentResult};
use std::path::Path;
use tracing::{debug, info, warn};

const MAX_LISTED_IDS: usize = 5;

/// Which row of the customer file to use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowSelector {
    #[default]
    First,
    CustomerId(String),
}

impl RowSelector {
    pub fn from_customer_id(id: Option<String>) -> Self {
        match id {
            Some(id) => RowSelector::CustomerId(id),
            None => RowSelector::First,
        }
    }
}

/// Read one customer from a CSV file with a header row.
///
/// Header names are trimmed and lowercased before they are checked against
/// [`REQUIRED_COLUMNS`], so `" Name"` and `"EMI_Amount"` are accepted.
/// Cells that are not valid UTF-8 (e.g. Windows exports) are read as latin-1.
pub fn load_customer(path: &Path, selector: &RowSelector) -> AgentResult<CustomerRecord> {
    if !path.exists() {
        return Err(AgentError::Data(format!(
            "Customer data file not found at {}",
            path.display()
        )));
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| data_error(path, e))?;

    let raw_headers = reader.byte_headers().map_err(|e| data_error(path, e))?;
    let headers = normalize_headers(&decode_record(raw_headers, 0));
    if headers.is_empty() {
        return Err(AgentError::Data(format!(
            "Customer data file {} is empty",
            path.display()
        )));
    }
    debug!(columns = ?headers, "customer file columns");

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(AgentError::Data(format!(
            "Missing required columns: {}",
            missing.join(", ")
        )));
    }

    if matches!(selector, RowSelector::CustomerId(_)) && !headers.iter().any(|h| h == "customer_id")
    {
        return Err(AgentError::Data(
            "'customer_id' column not found in the data file".into(),
        ));
    }

    let mut rows = 0usize;
    let mut seen_ids = Vec::new();
    for result in reader.byte_records() {
        rows += 1;
        let invalid_row = |e: csv::Error| {
            AgentError::Data(format!("Invalid customer row {}: {}", rows, e))
        };
        let raw = result.map_err(invalid_row)?;
        let record: CustomerRecord = decode_record(&raw, rows)
            .deserialize(Some(&headers))
            .map_err(invalid_row)?;

        match selector {
            RowSelector::First => {
                info!(customer = record.display_name(), "loaded first customer row");
                return Ok(record);
            }
            RowSelector::CustomerId(wanted) => {
                let id = record.customer_id.as_deref().map(str::trim);
                if id == Some(wanted.trim()) {
                    info!(customer_id = %wanted.trim(), rows, "loaded customer");
                    return Ok(record);
                }
                if let Some(id) = id {
                    if seen_ids.len() < MAX_LISTED_IDS {
                        seen_ids.push(id.to_string());
                    }
                }
            }
        }
    }

    if rows == 0 {
        return Err(AgentError::Data(format!(
            "Customer data file {} contains no data",
            path.display()
        )));
    }

    match selector {
        RowSelector::CustomerId(wanted) => Err(AgentError::Data(format!(
            "Customer ID '{}' not found. Available IDs (first {}): {}",
            wanted.trim(),
            MAX_LISTED_IDS,
            seen_ids.join(", ")
        ))),
        RowSelector::First => Err(AgentError::Data(format!(
            "Customer data file {} contains no data",
            path.display()
        ))),
    }
}

fn normalize_headers(raw: &StringRecord) -> StringRecord {
    raw.iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect()
}

/// Decode each field as UTF-8, falling back to latin-1 byte-for-byte.
fn decode_record(raw: &ByteRecord, row: usize) -> StringRecord {
    let mut fallback = false;
    let record: StringRecord = raw
        .iter()
        .map(|field| match std::str::from_utf8(field) {
            Ok(text) => text.trim().to_string(),
            Err(_) => {
                fallback = true;
                field.iter().map(|&b| char::from(b)).collect::<String>().trim().to_string()
            }
        })
        .collect();
    if fallback {
        warn!(row, "customer data is not valid UTF-8; decoded as latin-1");
    }
    record
}

fn data_error(path: &Path, err: csv::Error) -> AgentError {
    AgentError::Data(format!("Could not read {}: {}", path.display(), err))
}
