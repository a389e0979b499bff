//! Plain-text operator report for a submission.
//!
//! The wording is the Spanish layout the operators already receive. Inputs are
//! printed as entered; results are rounded here and nowhere else.

use crate::constants::REPORT_CURRENCY;
use crate::submissions::RoiSubmission;
use crate::utils::number_format::{format_grouped, format_number, format_thousands};

const PHONE_NOT_PROVIDED: &str = "No proporcionado";

/// Subject line for the operator email.
pub fn report_subject(company: &str) -> String {
    format!("Nuevo Cálculo ROI - {}", company)
}

/// Renders the operator report for `submission`.
pub fn render_report(submission: &RoiSubmission) -> String {
    let contact = &submission.contact_info;
    let input = &submission.calculation_input;
    let output = &submission.calculation_output;

    let mut lines = vec![
        "Nuevo cálculo de ROI realizado:".to_string(),
        String::new(),
        "=== INFORMACIÓN DE CONTACTO ===".to_string(),
        format!("Nombre: {}", contact.full_name),
        format!("Empresa: {}", contact.company),
        format!("Email: {}", contact.email),
        format!(
            "Teléfono: {}",
            contact.phone.as_deref().unwrap_or(PHONE_NOT_PROVIDED)
        ),
        String::new(),
        "=== DATOS INGRESADOS ===".to_string(),
        format!(
            "Consultas mensuales: {}",
            format_thousands(i64::from(input.monthly_inquiries))
        ),
        format!(
            "% Consultas automatizables (chatbot): {}%",
            input.chatbot_automatable_pct
        ),
        format!(
            "Tiempo respuesta manual: {} minutos",
            input.manual_response_minutes
        ),
        format!("Horas mensuales CRM: {}", input.crm_monthly_hours),
        format!(
            "% Tareas CRM automatizables: {}%",
            input.crm_automatable_pct
        ),
        format!("Personas involucradas: {}", input.people_involved),
        format!(
            "Costo horario empleado: {}",
            money(format_number(input.hourly_employee_cost))
        ),
        format!(
            "Costo licencia anual: {}",
            money(format_number(input.annual_license_cost))
        ),
        format!(
            "Costo implementación: {}",
            money(format_number(input.implementation_cost))
        ),
        String::new(),
        "=== RESULTADOS CALCULADOS ===".to_string(),
        format!(
            "Ahorro tiempo mensual (chatbot): {} horas",
            hours(output.chatbot_monthly_hours_saved)
        ),
        format!(
            "Ahorro económico anual (chatbot): {}",
            money(rounded(output.chatbot_annual_savings))
        ),
        format!(
            "Ahorro tiempo anual (CRM): {} horas",
            hours(output.crm_annual_hours_saved)
        ),
        format!(
            "Ahorro económico anual (CRM): {}",
            money(rounded(output.crm_annual_savings))
        ),
        String::new(),
        format!(
            "AHORRO TOTAL ANUAL: {}",
            money(rounded(output.total_annual_savings))
        ),
        format!(
            "INVERSIÓN TOTAL: {}",
            money(rounded(output.total_investment))
        ),
        format!("ROI ESTIMADO: {:.1}%", output.roi_percentage),
    ];

    if let Some(revenue) = output.additional_revenue {
        lines.push(String::new());
        lines.push(format!(
            "Ingresos adicionales estimados: {}",
            money(rounded(revenue))
        ));
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn money(amount: String) -> String {
    format!("${} {}", amount, REPORT_CURRENCY)
}

fn rounded(value: f64) -> String {
    format_grouped(value, 0)
}

// Hours and the ROI percentage are fixed-point without grouping.
fn hours(value: f64) -> String {
    format!("{:.1}", value)
}
