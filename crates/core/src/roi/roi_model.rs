//! ROI domain models.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::ValidationError;

type ValidationResult = std::result::Result<(), ValidationError>;

/// Business inputs for an ROI estimate.
///
/// Missing fields fall back to the baseline scenario in [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInput {
    // Chatbot usage
    pub monthly_inquiries: u32,
    pub chatbot_automatable_pct: f64,
    pub manual_response_minutes: f64,

    // CRM usage
    pub crm_monthly_hours: f64,
    pub crm_automatable_pct: f64,
    pub people_involved: u32,

    // Cost basis
    pub hourly_employee_cost: f64,
    pub annual_license_cost: f64,
    pub implementation_cost: f64,

    // Revenue uplift, all three or none
    pub average_ticket_value: Option<f64>,
    pub current_conversion_rate: Option<f64>,
    pub expected_conversion_rate: Option<f64>,
}

impl Default for RoiInput {
    fn default() -> Self {
        Self {
            monthly_inquiries: DEFAULT_MONTHLY_INQUIRIES,
            chatbot_automatable_pct: DEFAULT_CHATBOT_AUTOMATABLE_PCT,
            manual_response_minutes: DEFAULT_MANUAL_RESPONSE_MINUTES,
            crm_monthly_hours: DEFAULT_CRM_MONTHLY_HOURS,
            crm_automatable_pct: DEFAULT_CRM_AUTOMATABLE_PCT,
            people_involved: DEFAULT_PEOPLE_INVOLVED,
            hourly_employee_cost: DEFAULT_HOURLY_EMPLOYEE_COST,
            annual_license_cost: DEFAULT_ANNUAL_LICENSE_COST,
            implementation_cost: DEFAULT_IMPLEMENTATION_COST,
            average_ticket_value: None,
            current_conversion_rate: None,
            expected_conversion_rate: None,
        }
    }
}

/// The revenue-uplift triple, only available when every part was supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpliftInputs {
    pub average_ticket_value: f64,
    pub current_conversion_rate: f64,
    pub expected_conversion_rate: f64,
}

impl RoiInput {
    /// License plus implementation cost.
    pub fn total_investment(&self) -> f64 {
        self.annual_license_cost + self.implementation_cost
    }

    /// Returns the uplift inputs when all three are present.
    ///
    /// Partial presence is treated the same as absence.
    pub fn uplift(&self) -> Option<UpliftInputs> {
        match (
            self.average_ticket_value,
            self.current_conversion_rate,
            self.expected_conversion_rate,
        ) {
            (Some(ticket), Some(current), Some(expected)) => Some(UpliftInputs {
                average_ticket_value: ticket,
                current_conversion_rate: current,
                expected_conversion_rate: expected,
            }),
            _ => None,
        }
    }

    /// Basic type/range checks.
    ///
    /// Zero total investment is rejected here since the ROI percentage is
    /// undefined for it.
    pub fn validate(&self) -> ValidationResult {
        check_non_negative("manual_response_minutes", self.manual_response_minutes)?;
        check_non_negative("crm_monthly_hours", self.crm_monthly_hours)?;
        check_non_negative("hourly_employee_cost", self.hourly_employee_cost)?;
        check_non_negative("annual_license_cost", self.annual_license_cost)?;
        check_non_negative("implementation_cost", self.implementation_cost)?;
        check_percentage("chatbot_automatable_pct", self.chatbot_automatable_pct)?;
        check_percentage("crm_automatable_pct", self.crm_automatable_pct)?;

        if let Some(ticket) = self.average_ticket_value {
            check_non_negative("average_ticket_value", ticket)?;
        }
        if let Some(rate) = self.current_conversion_rate {
            check_percentage("current_conversion_rate", rate)?;
        }
        if let Some(rate) = self.expected_conversion_rate {
            check_percentage("expected_conversion_rate", rate)?;
        }

        if self.total_investment() <= 0.0 {
            return Err(ValidationError::InvalidInput(
                "total investment (license + implementation) must be greater than zero"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

fn check_non_negative(field: &str, value: f64) -> ValidationResult {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative(field.to_string()))
    }
}

fn check_percentage(field: &str, value: f64) -> ValidationResult {
    if value.is_finite() && (0.0..=MAX_PERCENTAGE).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, 0.0, MAX_PERCENTAGE))
    }
}

/// Computed savings and ROI figures. No rounding is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiOutput {
    pub chatbot_monthly_hours_saved: f64,
    pub chatbot_annual_savings: f64,
    pub crm_annual_hours_saved: f64,
    pub crm_annual_savings: f64,
    pub total_annual_savings: f64,
    pub total_investment: f64,
    pub roi_percentage: f64,
    pub additional_revenue: Option<f64>,
}

impl RoiOutput {
    /// False when any figure overflowed to infinity or is NaN.
    pub fn is_finite(&self) -> bool {
        [
            self.chatbot_monthly_hours_saved,
            self.chatbot_annual_savings,
            self.crm_annual_hours_saved,
            self.crm_annual_savings,
            self.total_annual_savings,
            self.total_investment,
            self.roi_percentage,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.additional_revenue.map_or(true, f64::is_finite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_baseline_scenario() {
        let input = RoiInput::default();
        assert_eq!(input.monthly_inquiries, 500);
        assert_eq!(input.people_involved, 3);
        assert_eq!(input.total_investment(), 1_400_000.0);
        assert!(input.uplift().is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let input: RoiInput =
            serde_json::from_str(r#"{"monthly_inquiries": 900, "people_involved": 5}"#).unwrap();
        assert_eq!(input.monthly_inquiries, 900);
        assert_eq!(input.people_involved, 5);
        assert_eq!(input.hourly_employee_cost, DEFAULT_HOURLY_EMPLOYEE_COST);
        assert_eq!(input.annual_license_cost, DEFAULT_ANNUAL_LICENSE_COST);
    }

    #[test]
    fn test_partial_uplift_is_absent() {
        let input = RoiInput {
            average_ticket_value: Some(1000.0),
            current_conversion_rate: Some(10.0),
            ..RoiInput::default()
        };
        assert!(input.uplift().is_none());

        let input = RoiInput {
            expected_conversion_rate: Some(20.0),
            ..input
        };
        assert_eq!(
            input.uplift(),
            Some(UpliftInputs {
                average_ticket_value: 1000.0,
                current_conversion_rate: 10.0,
                expected_conversion_rate: 20.0,
            })
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_percentage() {
        let input = RoiInput {
            crm_automatable_pct: 120.0,
            ..RoiInput::default()
        };
        match input.validate() {
            Err(ValidationError::OutOfRange { field, .. }) => {
                assert_eq!(field, "crm_automatable_pct")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_and_non_finite_values() {
        let negative = RoiInput {
            hourly_employee_cost: -1.0,
            ..RoiInput::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ValidationError::Negative(ref field)) if field == "hourly_employee_cost"
        ));

        let nan = RoiInput {
            manual_response_minutes: f64::NAN,
            ..RoiInput::default()
        };
        assert!(nan.validate().is_err());

        let bad_rate = RoiInput {
            current_conversion_rate: Some(-5.0),
            ..RoiInput::default()
        };
        assert!(bad_rate.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_investment() {
        let input = RoiInput {
            annual_license_cost: 0.0,
            implementation_cost: 0.0,
            ..RoiInput::default()
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::InvalidInput(_))
        ));

        let license_only = RoiInput {
            implementation_cost: 0.0,
            ..RoiInput::default()
        };
        assert!(license_only.validate().is_ok());
    }

    #[test]
    fn test_output_finiteness() {
        let output = RoiOutput {
            chatbot_monthly_hours_saved: 1.0,
            chatbot_annual_savings: 1.0,
            crm_annual_hours_saved: 1.0,
            crm_annual_savings: 1.0,
            total_annual_savings: 2.0,
            total_investment: 1.0,
            roi_percentage: 100.0,
            additional_revenue: None,
        };
        assert!(output.is_finite());

        let overflowed = RoiOutput {
            total_annual_savings: f64::INFINITY,
            ..output.clone()
        };
        assert!(!overflowed.is_finite());

        let nan_revenue = RoiOutput {
            additional_revenue: Some(f64::NAN),
            ..output
        };
        assert!(!nan_revenue.is_finite());
    }
}
