//! Bank "operations" export parser (CSV)
//!
//! Expected header (any order, extra columns ignored):
//!   Дата операции;Дата платежа;Номер карты;Статус;Сумма операции;
//!   Валюта операции;Сумма платежа;Валюта платежа;Кэшбэк;Категория;MCC;
//!   Описание;Бонусы (включая кэшбэк);Округление на инвесткопилку;
//!   Сумма операции с округлением
//!
//! Exports with decimal commas are `;`-delimited, the rest use `,`.

use csv::{ReaderBuilder, StringRecord, Trim};
use pocket_core::money::parse_amount;
use pocket_core::time::parse_day_first;
use pocket_core::{Transaction, TxStatus};
use std::io::Read;
use std::path::Path;

use crate::error::IngestError;
use crate::types::{Column, ColumnIndex};

fn sniff_delimiter(content: &[u8]) -> u8 {
    let header = content.split(|&b| b == b'\n').next().unwrap_or_default();
    if header.contains(&b';') { b';' } else { b',' }
}

/// Empty and `nan` cells both mean "no value".
fn clean_text(raw: &str) -> String {
    let s = raw.trim();
    if s.eq_ignore_ascii_case("nan") {
        String::new()
    } else {
        s.to_string()
    }
}

fn to_transaction(index: &ColumnIndex, record: &StringRecord) -> Transaction {
    let cell = |column: Column| index.get(record, column);

    Transaction {
        operation_date: parse_day_first(cell(Column::OperationDate)),
        payment_date: parse_day_first(cell(Column::PaymentDate)),
        card_number: clean_text(cell(Column::CardNumber)),
        status: TxStatus::parse(&clean_text(cell(Column::Status))),
        operation_amount: parse_amount(cell(Column::OperationAmount)),
        operation_currency: clean_text(cell(Column::OperationCurrency)),
        payment_amount: parse_amount(cell(Column::PaymentAmount)),
        payment_currency: clean_text(cell(Column::PaymentCurrency)),
        cashback: parse_amount(cell(Column::Cashback)),
        category: clean_text(cell(Column::Category)),
        mcc: clean_text(cell(Column::Mcc)),
        description: clean_text(cell(Column::Description)),
        bonuses: parse_amount(cell(Column::Bonuses)),
        invest_rounding: parse_amount(cell(Column::InvestRounding)),
        rounded_operation_amount: parse_amount(cell(Column::RoundedOperationAmount)),
    }
}

/// Parse export text into transactions.
///
/// Fails only when the header is unusable. Malformed rows are logged and
/// skipped; unparseable dates and amounts are kept as `None` / `0.00`.
pub fn parse_operations_str(content: &str) -> Result<Vec<Transaction>, IngestError> {
    parse_operations_bytes(content.as_bytes())
}

/// Same as [`parse_operations_str`] over raw bytes. A row that is not valid
/// UTF-8 is skipped like any other malformed row.
pub fn parse_operations_bytes(content: &[u8]) -> Result<Vec<Transaction>, IngestError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(sniff_delimiter(content))
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(content);

    let headers = rdr.headers()?.clone();
    let index = ColumnIndex::locate(&headers).map_err(IngestError::MissingColumns)?;

    let mut txns = Vec::new();
    for (row, result) in rdr.byte_records().enumerate() {
        // row + 2: 1-based, after the header line
        let record = match result {
            Ok(bytes) => StringRecord::from_byte_record(bytes).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        match record {
            Ok(record) => txns.push(to_transaction(&index, &record)),
            Err(e) => log::warn!("skipping export row {}: {e}", row + 2),
        }
    }

    Ok(txns)
}

/// Parse an export from any reader (stdin, an in-memory buffer).
pub fn parse_operations<R: Read>(mut reader: R) -> Result<Vec<Transaction>, IngestError> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|source| IngestError::Open {
            path: "<reader>".into(),
            source,
        })?;
    parse_operations_bytes(&content)
}

/// Load an export file, reporting why a whole file was rejected.
pub fn load_operations(path: impl AsRef<Path>) -> Result<Vec<Transaction>, IngestError> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let txns = parse_operations_bytes(&content)?;
    log::info!("loaded {} transactions from {}", txns.len(), path.display());
    Ok(txns)
}

/// Load an export file; any whole-file failure is logged and yields no
/// transactions.
pub fn read_operations(path: impl AsRef<Path>) -> Vec<Transaction> {
    match load_operations(path.as_ref()) {
        Ok(txns) => txns,
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    }
}
