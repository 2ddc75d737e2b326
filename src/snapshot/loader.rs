//! Import debts from CSV exports
//!
//! This is the sanitizing boundary: unrecognized types fall back to OTHER,
//! missing installments stay unset, and rows with negative or unparseable
//! balances are rejected here so the engine can assume clean input.

use std::path::Path;

use csv::Reader;
use log::{debug, warn};
use thiserror::Error;

use super::{Debt, DebtType};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: negative outstanding balance {balance}")]
    NegativeBalance { row: usize, balance: f64 },
}

/// Raw CSV row for a debt import
///
/// All engine-relevant fields are optional on the wire; defaults are
/// applied here, not downstream.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Lender")]
    lender: String,
    #[serde(rename = "Type")]
    debt_type: String,
    #[serde(rename = "OutstandingBalance")]
    outstanding_balance: f64,
    #[serde(rename = "CreditLimit", default)]
    credit_limit: Option<f64>,
    #[serde(rename = "MonthlyInstallment", default)]
    monthly_installment: Option<f64>,
    #[serde(rename = "InterestRate", default)]
    interest_rate: Option<f64>,
}

impl CsvRow {
    fn into_debt(self, row: usize) -> Result<Debt, LoadError> {
        if self.outstanding_balance < 0.0 || !self.outstanding_balance.is_finite() {
            return Err(LoadError::NegativeBalance {
                row,
                balance: self.outstanding_balance,
            });
        }

        let debt_type = DebtType::from_label(&self.debt_type);
        if debt_type == DebtType::Other && self.debt_type.trim().to_ascii_uppercase() != "OTHER" {
            warn!("row {}: unrecognized debt type {:?}, imported as OTHER", row, self.debt_type);
        }

        Ok(Debt {
            id: format!("import-{row}"),
            lender_name: self.lender,
            debt_type,
            outstanding_balance: self.outstanding_balance,
            credit_limit: self.credit_limit,
            monthly_installment: self.monthly_installment.filter(|&p| p > 0.0),
            installment_period: None,
            installment_unit: None,
            interest_rate: self.interest_rate,
        })
    }
}

/// Load debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>, LoadError> {
    let reader = Reader::from_path(path)?;
    load_from_csv_reader(reader)
}

/// Load debts from any reader (string buffer, network stream)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>, LoadError> {
    load_from_csv_reader(Reader::from_reader(reader))
}

fn load_from_csv_reader<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Debt>, LoadError> {
    let mut debts = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        debts.push(row.into_debt(idx + 1)?);
    }
    debug!("imported {} debts", debts.len());
    Ok(debts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Lender,Type,OutstandingBalance,CreditLimit,MonthlyInstallment,InterestRate
KBank,CREDIT_CARD,100000,150000,,
SCB,CAR_LOAN,600000,,12000,4.5
Krungsri,margin_account,50000,,,
";

    #[test]
    fn test_import_sample() {
        let debts = load_debts_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(debts.len(), 3);

        assert_eq!(debts[0].debt_type, DebtType::CreditCard);
        assert_eq!(debts[0].credit_limit, Some(150_000.0));
        assert_eq!(debts[0].monthly_installment, None);

        assert_eq!(debts[1].debt_type, DebtType::CarLoan);
        assert_eq!(debts[1].monthly_installment, Some(12_000.0));
        assert_eq!(debts[1].interest_rate, Some(4.5));

        // Unknown type sanitized to Other at the boundary
        assert_eq!(debts[2].debt_type, DebtType::Other);
    }

    #[test]
    fn test_negative_balance_rejected() {
        let csv = "Lender,Type,OutstandingBalance,CreditLimit,MonthlyInstallment,InterestRate\n\
                   KBank,CREDIT_CARD,-500,,,\n";
        let err = load_debts_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::NegativeBalance { row: 1, .. }));
    }

    #[test]
    fn test_zero_installment_treated_as_absent() {
        let csv = "Lender,Type,OutstandingBalance,CreditLimit,MonthlyInstallment,InterestRate\n\
                   SCB,CAR_LOAN,600000,,0,\n";
        let debts = load_debts_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(debts[0].monthly_installment, None);
    }

    #[test]
    fn test_import_ids_are_unique() {
        let debts = load_debts_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(debts[0].id, "import-1");
        assert_eq!(debts[2].id, "import-3");
    }
}
