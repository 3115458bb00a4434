//! Column layout of the operations export.

use csv::StringRecord;

/// Logical columns of an operations export, keyed by their localized header.
/// Declaration order matches `Column::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    OperationDate,
    PaymentDate,
    CardNumber,
    Status,
    OperationAmount,
    OperationCurrency,
    PaymentAmount,
    PaymentCurrency,
    Cashback,
    Category,
    Mcc,
    Description,
    Bonuses,
    InvestRounding,
    RoundedOperationAmount,
}

impl Column {
    pub const ALL: [Column; 15] = [
        Column::OperationDate,
        Column::PaymentDate,
        Column::CardNumber,
        Column::Status,
        Column::OperationAmount,
        Column::OperationCurrency,
        Column::PaymentAmount,
        Column::PaymentCurrency,
        Column::Cashback,
        Column::Category,
        Column::Mcc,
        Column::Description,
        Column::Bonuses,
        Column::InvestRounding,
        Column::RoundedOperationAmount,
    ];

    /// Header text as it appears in the bank export
    pub fn header(&self) -> &'static str {
        match self {
            Column::OperationDate => "Дата операции",
            Column::PaymentDate => "Дата платежа",
            Column::CardNumber => "Номер карты",
            Column::Status => "Статус",
            Column::OperationAmount => "Сумма операции",
            Column::OperationCurrency => "Валюта операции",
            Column::PaymentAmount => "Сумма платежа",
            Column::PaymentCurrency => "Валюта платежа",
            Column::Cashback => "Кэшбэк",
            Column::Category => "Категория",
            Column::Mcc => "MCC",
            Column::Description => "Описание",
            Column::Bonuses => "Бонусы (включая кэшбэк)",
            Column::InvestRounding => "Округление на инвесткопилку",
            Column::RoundedOperationAmount => "Сумма операции с округлением",
        }
    }
}

/// Position of every required column inside a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: [usize; Column::ALL.len()],
}

impl ColumnIndex {
    /// Locate each required column by header name. Order does not matter and
    /// extra columns are ignored. Returns the headers that are missing.
    pub fn locate(headers: &StringRecord) -> Result<Self, Vec<&'static str>> {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();

        let mut positions = [0usize; Column::ALL.len()];
        let mut missing = Vec::new();
        for (slot, column) in Column::ALL.iter().enumerate() {
            match names.iter().position(|name| *name == column.header()) {
                Some(pos) => positions[slot] = pos,
                None => missing.push(column.header()),
            }
        }

        if missing.is_empty() {
            Ok(Self { positions })
        } else {
            Err(missing)
        }
    }

    /// Raw cell for `column`, or `""` when the row is short.
    pub fn get<'r>(&self, record: &'r StringRecord, column: Column) -> &'r str {
        record.get(self.positions[column as usize]).unwrap_or("")
    }
}
