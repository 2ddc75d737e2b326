//! Pure calculation engine over user snapshots
//!
//! Every function here is synchronous, side-effect free, and total over its
//! documented input domain: invalid financial input yields a defined
//! empty/zero result, never an error or a NaN.

pub mod amortization;
pub mod dsr;
pub mod obligation;
pub mod payoff;
pub mod recommend;
pub mod refinance;
pub mod tax;

pub use amortization::{amortization_schedule, loan_installment, AmortizationRow};
pub use dsr::{calculate_dsr, DsrResult, DsrStatus};
pub use obligation::monthly_obligation;
pub use payoff::{simulate_payoff, PaymentEvent, PayoffMethod, PayoffPlan, MAX_SIMULATION_MONTHS};
pub use recommend::{generate_recommendations, Priority, Recommendation, Severity};
pub use refinance::{compare_refinance, RefinanceAction, RefinanceComparison, BREAK_EVEN_NEVER};
pub use tax::calculate_tax_saving;
