//! CSV loader for household snapshots.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Values
//! are trimmed. Optional columns may be omitted entirely.
//!
//! | Column        | Required         | Type    | Notes                                   |
//! |---------------|------------------|---------|-----------------------------------------|
//! | `name`        | yes              | string  |                                         |
//! | `amount`      | yes              | decimal | Paycheck, bill amount or debt balance   |
//! | `entry_type`  | yes              | string  | `Income`, `Bill` or `Debt`              |
//! | `category`    | no               | string  | Informational only                      |
//! | `frequency`   | no               | string  | Incomes: `Monthly`, `Bi-weekly`, `Weekly` |
//! | `date`        | no               | date    | `YYYY-MM-DD`; next pay date or due date |
//! | `apr`         | debts            | decimal | Percentage, e.g. `19.99`                |
//! | `min_payment` | debts            | decimal |                                         |
//!
//! ### Example
//!
//! ```csv
//! name,amount,entry_type,category,frequency,date,apr,min_payment
//! Salary,2000,Income,Work,Bi-weekly,2025-03-01,,
//! Internet,50,Bill,Utilities,,2025-03-10,,
//! Visa,5000,Debt,Credit card,,,24.99,100
//! ```

use std::io::Read;

use chrono::NaiveDate;
use payoff_core::{Bill, Debt, Income, PayFrequency};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a household CSV.
#[derive(Debug, Error)]
pub enum HouseholdLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("unrecognised entry type '{value}' on row {row}")]
    InvalidEntryType { value: String, row: usize },

    #[error("{entry_type} '{name}' on row {row} is missing {field}")]
    MissingField {
        entry_type: EntryType,
        name: String,
        field: &'static str,
        row: usize,
    },

    #[error("'{name}' on row {row} has a negative {field}: {value}")]
    NegativeAmount {
        name: String,
        field: &'static str,
        value: Decimal,
        row: usize,
    },
}

/// The kind of record a CSV row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Income,
    Bill,
    Debt,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Bill => "Bill",
            Self::Debt => "Debt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "bill" => Some(Self::Bill),
            "debt" => Some(Self::Debt),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of the household CSV, before validation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EntryRecord {
    pub name: String,
    pub amount: Decimal,
    pub entry_type: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub apr: Option<Decimal>,
    #[serde(default)]
    pub min_payment: Option<Decimal>,
}

/// Validated snapshot handed to the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Household {
    pub incomes: Vec<Income>,
    pub bills: Vec<Bill>,
    pub debts: Vec<Debt>,
}

/// Loader for household CSV files.
pub struct HouseholdLoader;

impl HouseholdLoader {
    /// Parse raw rows from a CSV reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<EntryRecord>, HouseholdLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: EntryRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Validate parsed rows and sort them into incomes, bills and debts.
    ///
    /// Rows keep their file order within each group.
    pub fn build(records: Vec<EntryRecord>) -> Result<Household, HouseholdLoadError> {
        let mut household = Household::default();

        for (index, record) in records.into_iter().enumerate() {
            let row = index + 1;
            let entry_type = EntryType::parse(&record.entry_type).ok_or_else(|| {
                HouseholdLoadError::InvalidEntryType {
                    value: record.entry_type.clone(),
                    row,
                }
            })?;
            check_non_negative(&record.name, "amount", record.amount, row)?;

            match entry_type {
                EntryType::Income => household.incomes.push(Income {
                    frequency: record
                        .frequency
                        .as_deref()
                        .map(PayFrequency::from_label)
                        .unwrap_or_default(),
                    name: record.name,
                    amount: record.amount,
                    next_pay_date: record.date,
                }),
                EntryType::Bill => household.bills.push(Bill {
                    name: record.name,
                    amount: record.amount,
                    due_date: record.date,
                }),
                EntryType::Debt => {
                    let apr_percent = required(entry_type, &record, "apr", record.apr, row)?;
                    let min_payment =
                        required(entry_type, &record, "min_payment", record.min_payment, row)?;
                    check_non_negative(&record.name, "apr", apr_percent, row)?;
                    check_non_negative(&record.name, "min_payment", min_payment, row)?;

                    household.debts.push(Debt {
                        name: record.name,
                        balance: record.amount,
                        apr_percent,
                        min_payment,
                    });
                }
            }
        }

        Ok(household)
    }

    /// Parse and validate in one step.
    pub fn load<R: Read>(reader: R) -> Result<Household, HouseholdLoadError> {
        Self::build(Self::parse(reader)?)
    }
}

fn required(
    entry_type: EntryType,
    record: &EntryRecord,
    field: &'static str,
    value: Option<Decimal>,
    row: usize,
) -> Result<Decimal, HouseholdLoadError> {
    value.ok_or_else(|| HouseholdLoadError::MissingField {
        entry_type,
        name: record.name.clone(),
        field,
        row,
    })
}

fn check_non_negative(
    name: &str,
    field: &'static str,
    value: Decimal,
    row: usize,
) -> Result<(), HouseholdLoadError> {
    if value < Decimal::ZERO {
        return Err(HouseholdLoadError::NegativeAmount {
            name: name.to_string(),
            field,
            value,
            row,
        });
    }
    Ok(())
}
