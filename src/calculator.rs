// 🧮 Calculator - Simple interest, total repayment, monthly payment
// Pure arithmetic over already-validated terms. No failure modes.

use crate::duration::{DurationUnit, MONTHS_PER_YEAR};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// INPUTS
// ============================================================================

/// Validated inputs of one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed (> 0)
    pub principal: f64,

    /// Annual rate in percentage points, 5.4 means 5.4% (>= 0)
    pub annual_rate: f64,

    /// Agreement length as the user typed it (> 0)
    pub duration_value: f64,

    /// Unit the duration was given in
    pub duration_unit: DurationUnit,
}

impl LoanTerms {
    pub fn duration_years(&self) -> f64 {
        self.duration_unit.to_years(self.duration_value)
    }
}

// ============================================================================
// DERIVED FIGURES
// ============================================================================

/// Huge principals or rates can overflow to infinity; those figures
/// serialize as "inf" / "nan" text instead of JSON null.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    #[serde(with = "float_text")]
    pub duration_years: f64,
    #[serde(with = "float_text")]
    pub duration_months: f64,
    #[serde(with = "float_text")]
    pub simple_interest: f64,
    #[serde(with = "float_text")]
    pub total_amount: f64,
    #[serde(with = "float_text")]
    pub minimum_monthly_payment: f64,
}

impl Calculation {
    pub fn is_finite(&self) -> bool {
        [
            self.duration_years,
            self.duration_months,
            self.simple_interest,
            self.total_amount,
            self.minimum_monthly_payment,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Finite floats as JSON numbers, the rest as "inf" / "-inf" / "nan"
mod float_text {
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("nan")
        } else if value.is_sign_negative() {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_str("inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "nan" => Ok(f64::NAN),
                other => Err(de::Error::custom(format!("not a figure: {:?}", other))),
            },
        }
    }
}

/// Compute simple interest and the figures derived from it
pub fn compute(terms: &LoanTerms) -> Calculation {
    let duration_years = terms.duration_years();
    let duration_months = duration_years * MONTHS_PER_YEAR;

    let rate_decimal = terms.annual_rate / 100.0;
    let simple_interest = terms.principal * rate_decimal * duration_years;
    let total_amount = terms.principal + simple_interest;

    let minimum_monthly_payment = if duration_months > 0.0 {
        total_amount / duration_months
    } else {
        0.0
    };

    Calculation {
        duration_years,
        duration_months,
        simple_interest,
        total_amount,
        minimum_monthly_payment,
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One completed iteration of the session, kept in memory only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// 1-based position within the session
    pub sequence: usize,
    pub calculated_at: DateTime<Utc>,
    pub terms: LoanTerms,
    pub calculation: Calculation,
}

impl CalculationRecord {
    pub fn new(sequence: usize, terms: LoanTerms) -> Self {
        CalculationRecord {
            sequence,
            calculated_at: Utc::now(),
            calculation: compute(&terms),
            terms,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn terms(principal: f64, annual_rate: f64, value: f64, unit: DurationUnit) -> LoanTerms {
        LoanTerms {
            principal,
            annual_rate,
            duration_value: value,
            duration_unit: unit,
        }
    }

    #[test]
    fn test_two_years_at_five_percent() {
        let calc = compute(&terms(1000.0, 5.0, 2.0, DurationUnit::Years));

        assert_relative_eq!(calc.duration_years, 2.0);
        assert_relative_eq!(calc.duration_months, 24.0);
        assert_relative_eq!(calc.simple_interest, 100.0, epsilon = 1e-9);
        assert_relative_eq!(calc.total_amount, 1100.0, epsilon = 1e-9);
        assert_relative_eq!(calc.minimum_monthly_payment, 45.8333333333, epsilon = 1e-6);
    }

    #[test]
    fn test_six_months_at_three_and_a_half_percent() {
        let calc = compute(&terms(5000.0, 3.5, 6.0, DurationUnit::Months));

        assert_relative_eq!(calc.duration_years, 0.5);
        assert_relative_eq!(calc.duration_months, 6.0);
        assert_relative_eq!(calc.simple_interest, 87.5, epsilon = 1e-9);
        assert_relative_eq!(calc.total_amount, 5087.5, epsilon = 1e-9);
        assert_relative_eq!(calc.minimum_monthly_payment, 847.9166666667, epsilon = 1e-6);
    }

    #[test]
    fn test_days_use_365_day_year() {
        let calc = compute(&terms(3650.0, 10.0, 365.0, DurationUnit::Days));

        assert_relative_eq!(calc.duration_years, 1.0);
        assert_relative_eq!(calc.simple_interest, 365.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_means_no_interest() {
        let calc = compute(&terms(1200.0, 0.0, 1.0, DurationUnit::Years));

        assert_eq!(calc.simple_interest, 0.0);
        assert_eq!(calc.total_amount, 1200.0);
        assert_relative_eq!(calc.minimum_monthly_payment, 100.0);
    }

    #[test]
    fn test_zero_duration_guard() {
        let calc = compute(&terms(1000.0, 5.0, 0.0, DurationUnit::Years));

        assert_eq!(calc.duration_months, 0.0);
        assert_eq!(calc.minimum_monthly_payment, 0.0);
    }

    #[test]
    fn test_record_carries_computed_figures() {
        let record = CalculationRecord::new(3, terms(1000.0, 5.0, 2.0, DurationUnit::Years));

        assert_eq!(record.sequence, 3);
        assert_relative_eq!(record.calculation.total_amount, 1100.0, epsilon = 1e-9);
        assert!(record.calculated_at <= Utc::now());
    }

    #[test]
    fn test_overflow_survives_json() {
        let calc = compute(&terms(1e308, 100.0, 10.0, DurationUnit::Years));
        assert!(calc.total_amount.is_infinite());
        assert!(!calc.is_finite());

        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains(r#""total_amount":"inf""#));
        assert!(json.contains(r#""duration_months":120.0"#));

        let back: Calculation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.duration_months, 120.0);
        assert!(back.simple_interest.is_infinite());
        assert!(back.minimum_monthly_payment.is_infinite());
    }

    #[test]
    fn test_nan_and_bad_text_in_json() {
        let json = r#"{"duration_years":1.0,"duration_months":12.0,"simple_interest":"nan","total_amount":"-inf","minimum_monthly_payment":0.5}"#;
        let calc: Calculation = serde_json::from_str(json).unwrap();
        assert!(calc.simple_interest.is_nan());
        assert_eq!(calc.total_amount, f64::NEG_INFINITY);

        let bad = json.replace(r#""nan""#, r#""lots""#);
        assert!(serde_json::from_str::<Calculation>(&bad).is_err());
    }

    fn any_unit() -> impl Strategy<Value = DurationUnit> {
        prop_oneof![
            Just(DurationUnit::Years),
            Just(DurationUnit::Months),
            Just(DurationUnit::Days),
        ]
    }

    proptest! {
        #[test]
        fn prop_total_never_below_principal(
            principal in 0.01f64..1e9,
            rate in 0.0f64..100.0,
            value in 0.01f64..1e4,
            unit in any_unit(),
        ) {
            let calc = compute(&terms(principal, rate, value, unit));
            prop_assert!(calc.total_amount >= principal);
        }

        #[test]
        fn prop_monthly_payment_times_months_is_total(
            principal in 0.01f64..1e9,
            rate in 0.0f64..100.0,
            value in 0.01f64..1e4,
            unit in any_unit(),
        ) {
            let calc = compute(&terms(principal, rate, value, unit));
            prop_assert!(calc.duration_months > 0.0);

            let recovered = calc.minimum_monthly_payment * calc.duration_months;
            prop_assert!((recovered - calc.total_amount).abs() <= calc.total_amount * 1e-9);
        }
    }
}
