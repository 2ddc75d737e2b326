//! Snapshot data structures: debts, income sources, and the aggregate root

use serde::{Deserialize, Serialize};

/// Category of a liability
///
/// Fixed at creation; downstream calculations key their heuristics off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtType {
    CreditCard,
    PersonalLoan,
    CarLoan,
    HomeLoan,
    Other,
}

impl DebtType {
    /// Parse a type label from import data, falling back to Other
    /// for anything unrecognized (sanitation happens here, not in the engine)
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "CREDIT_CARD" => DebtType::CreditCard,
            "PERSONAL_LOAN" => DebtType::PersonalLoan,
            "CAR_LOAN" => DebtType::CarLoan,
            "HOME_LOAN" => DebtType::HomeLoan,
            _ => DebtType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DebtType::CreditCard => "CREDIT_CARD",
            DebtType::PersonalLoan => "PERSONAL_LOAN",
            DebtType::CarLoan => "CAR_LOAN",
            DebtType::HomeLoan => "HOME_LOAN",
            DebtType::Other => "OTHER",
        }
    }

    /// Installment loans carry a contractual schedule, so a stored
    /// installment is trusted as-is by the obligation resolver
    pub fn is_installment_loan(&self) -> bool {
        matches!(self, DebtType::CarLoan | DebtType::HomeLoan | DebtType::Other)
    }
}

/// Unit for an optional repayment term entered alongside a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallmentUnit {
    Months,
    Years,
    None,
}

/// A single liability record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Unique identifier, assigned at creation
    pub id: String,

    /// Free-text lender label
    pub lender_name: String,

    /// Liability category
    #[serde(rename = "type")]
    pub debt_type: DebtType,

    /// Principal still owed (non-negative, enforced at construction)
    pub outstanding_balance: f64,

    /// Credit limit, meaningful only for revolving credit
    #[serde(default)]
    pub credit_limit: Option<f64>,

    /// Explicit recurring payment; when absent the obligation resolver
    /// derives one from the balance
    #[serde(default)]
    pub monthly_installment: Option<f64>,

    /// Optional term length used to derive the installment at input time
    #[serde(default)]
    pub installment_period: Option<u32>,

    /// Unit for installment_period
    #[serde(default)]
    pub installment_unit: Option<InstallmentUnit>,

    /// Annual interest rate in percent, when known
    #[serde(default)]
    pub interest_rate: Option<f64>,
}

impl Debt {
    /// Create a debt with the required fields
    ///
    /// Returns None for a negative balance; the engine assumes sanitized
    /// input, so rejection happens here at the boundary.
    pub fn new(
        id: impl Into<String>,
        lender_name: impl Into<String>,
        debt_type: DebtType,
        outstanding_balance: f64,
    ) -> Option<Self> {
        if !outstanding_balance.is_finite() || outstanding_balance < 0.0 {
            return None;
        }
        Some(Self {
            id: id.into(),
            lender_name: lender_name.into(),
            debt_type,
            outstanding_balance,
            credit_limit: None,
            monthly_installment: None,
            installment_period: None,
            installment_unit: None,
            interest_rate: None,
        })
    }

    /// Set an explicit monthly installment
    pub fn with_installment(mut self, installment: f64) -> Self {
        self.monthly_installment = Some(installment);
        self
    }

    /// Set the annual interest rate in percent
    pub fn with_rate(mut self, annual_rate_percent: f64) -> Self {
        self.interest_rate = Some(annual_rate_percent);
        self
    }

    /// Set the repayment term
    pub fn with_term(mut self, period: u32, unit: InstallmentUnit) -> Self {
        self.installment_period = Some(period);
        self.installment_unit = Some(unit);
        self
    }

    /// Term length in months, if a usable term was entered
    pub fn term_months(&self) -> Option<u32> {
        let period = self.installment_period?;
        match self.installment_unit.unwrap_or(InstallmentUnit::Months) {
            InstallmentUnit::Months => Some(period),
            InstallmentUnit::Years => Some(period * 12),
            InstallmentUnit::None => None,
        }
    }

    /// Inputs for an amortization schedule of this debt, when a term is
    /// known: remaining balance, annual rate in percent (0 when unknown),
    /// and whole years with partial years rounded up
    pub fn amortization_terms(&self) -> Option<(f64, f64, u32)> {
        let months = self.term_months()?;
        if months == 0 || self.outstanding_balance <= 0.0 {
            return None;
        }
        let years = months.div_ceil(12);
        Some((self.outstanding_balance, self.interest_rate.unwrap_or(0.0), years))
    }
}

/// A recurring income source beyond the gross salary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: String,
    pub name: String,
    /// Monthly amount, non-negative
    pub amount: f64,
}

/// Aggregate root: the user's full financial picture at a point in time
///
/// Sole input to every engine calculation. The engine never mutates a
/// snapshot; all functions return freshly constructed results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub gross_monthly_income: f64,

    #[serde(default)]
    pub additional_incomes: Vec<IncomeSource>,

    #[serde(default)]
    pub debts: Vec<Debt>,
}

impl UserSnapshot {
    /// Create a snapshot with just a gross income and no debts
    pub fn new(gross_monthly_income: f64) -> Self {
        Self {
            gross_monthly_income,
            additional_incomes: Vec::new(),
            debts: Vec::new(),
        }
    }

    /// Append a debt
    pub fn add_debt(&mut self, debt: Debt) {
        self.debts.push(debt);
    }

    /// Replace the debt with a matching id, if present
    pub fn update_debt(&mut self, debt: Debt) -> bool {
        match self.debts.iter_mut().find(|d| d.id == debt.id) {
            Some(slot) => {
                *slot = debt;
                true
            }
            None => false,
        }
    }

    /// Remove the debt with the given id, if present
    pub fn remove_debt(&mut self, id: &str) -> bool {
        let before = self.debts.len();
        self.debts.retain(|d| d.id != id);
        self.debts.len() < before
    }

    /// Total monthly income including additional sources
    pub fn total_monthly_income(&self) -> f64 {
        self.gross_monthly_income + self.additional_incomes.iter().map(|i| i.amount).sum::<f64>()
    }

    /// Sum of outstanding balances across all debts
    pub fn total_debt(&self) -> f64 {
        self.debts.iter().map(|d| d.outstanding_balance).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_type_labels() {
        assert_eq!(DebtType::from_label("CREDIT_CARD"), DebtType::CreditCard);
        assert_eq!(DebtType::from_label("home_loan"), DebtType::HomeLoan);
        assert_eq!(DebtType::from_label("  CAR_LOAN "), DebtType::CarLoan);
        // Unrecognized labels fall back to Other
        assert_eq!(DebtType::from_label("CRYPTO_MARGIN"), DebtType::Other);
        assert_eq!(DebtType::from_label(""), DebtType::Other);
    }

    #[test]
    fn test_negative_balance_rejected() {
        assert!(Debt::new("d1", "Bank", DebtType::CreditCard, -1.0).is_none());
        assert!(Debt::new("d1", "Bank", DebtType::CreditCard, f64::NAN).is_none());
        assert!(Debt::new("d1", "Bank", DebtType::CreditCard, 0.0).is_some());
    }

    #[test]
    fn test_term_months() {
        let d = Debt::new("d1", "Bank", DebtType::CarLoan, 300_000.0)
            .unwrap()
            .with_term(5, InstallmentUnit::Years);
        assert_eq!(d.term_months(), Some(60));

        let d = Debt::new("d2", "Bank", DebtType::CarLoan, 300_000.0)
            .unwrap()
            .with_term(48, InstallmentUnit::Months);
        assert_eq!(d.term_months(), Some(48));

        let d = Debt::new("d3", "Bank", DebtType::CreditCard, 300_000.0).unwrap();
        assert_eq!(d.term_months(), None);
    }

    #[test]
    fn test_amortization_terms() {
        let home = Debt::new("h1", "Bank", DebtType::HomeLoan, 2_400_000.0)
            .unwrap()
            .with_rate(3.5)
            .with_term(20, InstallmentUnit::Years);
        assert_eq!(home.amortization_terms(), Some((2_400_000.0, 3.5, 20)));

        // Partial years round up, missing rate defaults to 0
        let short = Debt::new("h2", "Bank", DebtType::HomeLoan, 500_000.0)
            .unwrap()
            .with_term(30, InstallmentUnit::Months);
        assert_eq!(short.amortization_terms(), Some((500_000.0, 0.0, 3)));

        // No term or no balance: nothing to schedule
        let no_term = Debt::new("h3", "Bank", DebtType::HomeLoan, 500_000.0).unwrap();
        assert_eq!(no_term.amortization_terms(), None);

        let paid_off = Debt::new("h4", "Bank", DebtType::HomeLoan, 0.0)
            .unwrap()
            .with_term(10, InstallmentUnit::Years);
        assert_eq!(paid_off.amortization_terms(), None);
    }

    #[test]
    fn test_snapshot_debt_lifecycle() {
        let mut snapshot = UserSnapshot::new(50_000.0);
        let debt = Debt::new("d1", "KBank", DebtType::CreditCard, 100_000.0).unwrap();
        snapshot.add_debt(debt.clone());
        assert_eq!(snapshot.debts.len(), 1);

        let updated = Debt::new("d1", "KBank", DebtType::CreditCard, 80_000.0).unwrap();
        assert!(snapshot.update_debt(updated));
        assert_eq!(snapshot.debts[0].outstanding_balance, 80_000.0);

        // Updating an unknown id is a no-op
        let stranger = Debt::new("zz", "SCB", DebtType::Other, 1.0).unwrap();
        assert!(!snapshot.update_debt(stranger));

        assert!(snapshot.remove_debt("d1"));
        assert!(!snapshot.remove_debt("d1"));
        assert!(snapshot.debts.is_empty());
    }

    #[test]
    fn test_income_totals() {
        let mut snapshot = UserSnapshot::new(40_000.0);
        snapshot.additional_incomes.push(IncomeSource {
            id: "i1".into(),
            name: "Freelance".into(),
            amount: 10_000.0,
        });
        assert_eq!(snapshot.total_monthly_income(), 50_000.0);
    }
}
