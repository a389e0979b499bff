//! Wire models. Field names are the ones the calculator frontend sends.

use roi_core::roi as core_roi;
use roi_core::submissions as core_submissions;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(default)]
pub struct RoiInput {
    pub consultas_mensuales: u32,
    pub porcentaje_automatizable_chatbot: f64,
    pub tiempo_respuesta_manual: f64,
    pub horas_mensuales_crm: f64,
    pub porcentaje_automatizable_crm: f64,
    pub personas_involucradas: u32,
    pub costo_horario_empleado: f64,
    pub costo_licencia_anual: f64,
    pub costo_implementacion: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_ticket_promedio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasa_conversion_actual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasa_conversion_esperada: Option<f64>,
}

impl Default for RoiInput {
    fn default() -> Self {
        Self::from(core_roi::RoiInput::default())
    }
}

impl From<core_roi::RoiInput> for RoiInput {
    fn from(i: core_roi::RoiInput) -> Self {
        Self {
            consultas_mensuales: i.monthly_inquiries,
            porcentaje_automatizable_chatbot: i.chatbot_automatable_pct,
            tiempo_respuesta_manual: i.manual_response_minutes,
            horas_mensuales_crm: i.crm_monthly_hours,
            porcentaje_automatizable_crm: i.crm_automatable_pct,
            personas_involucradas: i.people_involved,
            costo_horario_empleado: i.hourly_employee_cost,
            costo_licencia_anual: i.annual_license_cost,
            costo_implementacion: i.implementation_cost,
            valor_ticket_promedio: i.average_ticket_value,
            tasa_conversion_actual: i.current_conversion_rate,
            tasa_conversion_esperada: i.expected_conversion_rate,
        }
    }
}

impl From<RoiInput> for core_roi::RoiInput {
    fn from(i: RoiInput) -> Self {
        Self {
            monthly_inquiries: i.consultas_mensuales,
            chatbot_automatable_pct: i.porcentaje_automatizable_chatbot,
            manual_response_minutes: i.tiempo_respuesta_manual,
            crm_monthly_hours: i.horas_mensuales_crm,
            crm_automatable_pct: i.porcentaje_automatizable_crm,
            people_involved: i.personas_involucradas,
            hourly_employee_cost: i.costo_horario_empleado,
            annual_license_cost: i.costo_licencia_anual,
            implementation_cost: i.costo_implementacion,
            average_ticket_value: i.valor_ticket_promedio,
            current_conversion_rate: i.tasa_conversion_actual,
            expected_conversion_rate: i.tasa_conversion_esperada,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RoiOutput {
    pub ahorro_tiempo_mensual_chatbot: f64,
    pub ahorro_economico_anual_chatbot: f64,
    pub ahorro_tiempo_anual_crm: f64,
    pub ahorro_economico_anual_crm: f64,
    pub ahorro_total_anual: f64,
    pub inversion_total: f64,
    pub roi_porcentaje: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingresos_adicionales_estimados: Option<f64>,
}

impl From<core_roi::RoiOutput> for RoiOutput {
    fn from(o: core_roi::RoiOutput) -> Self {
        Self {
            ahorro_tiempo_mensual_chatbot: o.chatbot_monthly_hours_saved,
            ahorro_economico_anual_chatbot: o.chatbot_annual_savings,
            ahorro_tiempo_anual_crm: o.crm_annual_hours_saved,
            ahorro_economico_anual_crm: o.crm_annual_savings,
            ahorro_total_anual: o.total_annual_savings,
            inversion_total: o.total_investment,
            roi_porcentaje: o.roi_percentage,
            ingresos_adicionales_estimados: o.additional_revenue,
        }
    }
}

impl From<RoiOutput> for core_roi::RoiOutput {
    fn from(o: RoiOutput) -> Self {
        Self {
            chatbot_monthly_hours_saved: o.ahorro_tiempo_mensual_chatbot,
            chatbot_annual_savings: o.ahorro_economico_anual_chatbot,
            crm_annual_hours_saved: o.ahorro_tiempo_anual_crm,
            crm_annual_savings: o.ahorro_economico_anual_crm,
            total_annual_savings: o.ahorro_total_anual,
            total_investment: o.inversion_total,
            roi_percentage: o.roi_porcentaje,
            additional_revenue: o.ingresos_adicionales_estimados,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ContactInfo {
    pub nombre_completo: String,
    pub empresa: String,
    pub email: String,
    #[serde(default)]
    pub telefono: Option<String>,
}

impl From<ContactInfo> for core_submissions::ContactInfo {
    fn from(c: ContactInfo) -> Self {
        Self {
            full_name: c.nombre_completo,
            company: c.empresa,
            email: c.email,
            phone: c.telefono,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RoiSubmission {
    pub calculation_input: RoiInput,
    pub calculation_output: RoiOutput,
    pub contact_info: ContactInfo,
}

impl From<RoiSubmission> for core_submissions::RoiSubmission {
    fn from(s: RoiSubmission) -> Self {
        Self {
            calculation_input: s.calculation_input.into(),
            calculation_output: s.calculation_output.into(),
            contact_info: s.contact_info.into(),
        }
    }
}

/// Acknowledgement returned by both POST endpoints.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}
