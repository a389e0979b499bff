//! ROI calculation.
//!
//! Pure and deterministic: the result depends only on the input. The order and
//! grouping of each floating-point operation is significant; changing it can
//! change the last bits of the output.

use super::roi_model::{RoiInput, RoiOutput, UpliftInputs};

const MINUTES_PER_HOUR: f64 = 60.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const PERCENT: f64 = 100.0;

/// Computes savings, ROI and (optionally) additional revenue for `input`.
///
/// Total for any input. Callers that need a finite ROI percentage must reject
/// zero investment first (see [`RoiInput::validate`]).
pub fn calculate_roi(input: &RoiInput) -> RoiOutput {
    let monthly_inquiries = f64::from(input.monthly_inquiries);

    // Chatbot
    let automatable_inquiries = monthly_inquiries * (input.chatbot_automatable_pct / PERCENT);
    let chatbot_monthly_hours_saved =
        (automatable_inquiries * input.manual_response_minutes) / MINUTES_PER_HOUR;
    let chatbot_annual_savings =
        chatbot_monthly_hours_saved * MONTHS_PER_YEAR * input.hourly_employee_cost;

    // CRM
    let crm_annual_hours_saved = (input.crm_monthly_hours * MONTHS_PER_YEAR
        * input.crm_automatable_pct
        / PERCENT)
        * f64::from(input.people_involved);
    let crm_annual_savings = crm_annual_hours_saved * input.hourly_employee_cost;

    // Totals
    let total_annual_savings = chatbot_annual_savings + crm_annual_savings;
    let total_investment = input.total_investment();
    let roi_percentage = ((total_annual_savings - total_investment) / total_investment) * PERCENT;

    let additional_revenue = input
        .uplift()
        .map(|uplift| additional_revenue(monthly_inquiries, &uplift));

    RoiOutput {
        chatbot_monthly_hours_saved,
        chatbot_annual_savings,
        crm_annual_hours_saved,
        crm_annual_savings,
        total_annual_savings,
        total_investment,
        roi_percentage,
        additional_revenue,
    }
}

fn additional_revenue(monthly_inquiries: f64, uplift: &UpliftInputs) -> f64 {
    let annual_inquiries = monthly_inquiries * MONTHS_PER_YEAR;
    let current_sales = annual_inquiries * (uplift.current_conversion_rate / PERCENT);
    let expected_sales = annual_inquiries * (uplift.expected_conversion_rate / PERCENT);
    (expected_sales - current_sales) * uplift.average_ticket_value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uplift_input() -> RoiInput {
        RoiInput {
            average_ticket_value: Some(1000.0),
            current_conversion_rate: Some(10.0),
            expected_conversion_rate: Some(20.0),
            ..RoiInput::default()
        }
    }

    #[test]
    fn test_baseline_scenario() {
        let output = calculate_roi(&RoiInput::default());

        assert_eq!(
            output.chatbot_monthly_hours_saved,
            (500.0 * (70.0 / 100.0) * 4.0) / 60.0
        );
        assert_eq!(output.crm_annual_hours_saved, 1728.0);
        assert_eq!(output.crm_annual_savings, 3_456_000.0);
        assert_eq!(output.total_investment, 1_400_000.0);
        assert_eq!(output.additional_revenue, None);
    }

    #[test]
    fn test_baseline_scenario_is_bit_exact() {
        let output = calculate_roi(&RoiInput::default());

        assert_eq!(
            output.chatbot_monthly_hours_saved.to_bits(),
            23.333333333333332_f64.to_bits()
        );
        assert_eq!(output.chatbot_annual_savings.to_bits(), 560_000.0_f64.to_bits());
        assert_eq!(output.total_annual_savings.to_bits(), 4_016_000.0_f64.to_bits());
        assert_eq!(
            output.roi_percentage.to_bits(),
            186.85714285714286_f64.to_bits()
        );
    }

    #[test]
    fn test_additional_revenue_with_uplift_inputs() {
        let output = calculate_roi(&uplift_input());
        let revenue = output.additional_revenue.expect("uplift should be computed");
        assert!((revenue - 600_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_additional_revenue_absent_when_uplift_is_partial() {
        for input in [
            RoiInput {
                average_ticket_value: None,
                ..uplift_input()
            },
            RoiInput {
                current_conversion_rate: None,
                ..uplift_input()
            },
            RoiInput {
                expected_conversion_rate: None,
                ..uplift_input()
            },
        ] {
            assert_eq!(calculate_roi(&input).additional_revenue, None);
        }
    }

    #[test]
    fn test_zero_uplift_values_are_still_computed() {
        let input = RoiInput {
            current_conversion_rate: Some(0.0),
            ..uplift_input()
        };
        let revenue = calculate_roi(&input).additional_revenue.unwrap();
        assert!((revenue - 1_200_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let input = RoiInput {
            monthly_inquiries: 1234,
            chatbot_automatable_pct: 33.3,
            manual_response_minutes: 7.5,
            crm_monthly_hours: 87.25,
            crm_automatable_pct: 12.5,
            people_involved: 7,
            hourly_employee_cost: 3150.75,
            annual_license_cost: 250_000.0,
            implementation_cost: 800_000.0,
            average_ticket_value: Some(4321.0),
            current_conversion_rate: Some(2.5),
            expected_conversion_rate: Some(3.75),
        };
        let first = calculate_roi(&input);
        let second = calculate_roi(&input);

        assert_eq!(
            first.roi_percentage.to_bits(),
            second.roi_percentage.to_bits()
        );
        assert_eq!(
            first.additional_revenue.map(f64::to_bits),
            second.additional_revenue.map(f64::to_bits)
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_nothing_automatable_gives_negative_roi() {
        let input = RoiInput {
            chatbot_automatable_pct: 0.0,
            crm_automatable_pct: 0.0,
            ..RoiInput::default()
        };
        let output = calculate_roi(&input);
        assert_eq!(output.total_annual_savings, 0.0);
        assert_eq!(output.roi_percentage, -100.0);
    }

    #[test]
    fn test_zero_investment_does_not_panic() {
        let input = RoiInput {
            annual_license_cost: 0.0,
            implementation_cost: 0.0,
            ..RoiInput::default()
        };
        let output = calculate_roi(&input);
        assert!(output.roi_percentage.is_infinite());
    }
}
