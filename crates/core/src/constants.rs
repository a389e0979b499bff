/// Default monthly customer inquiries
pub const DEFAULT_MONTHLY_INQUIRIES: u32 = 500;

/// Default share of inquiries a chatbot can answer (%)
pub const DEFAULT_CHATBOT_AUTOMATABLE_PCT: f64 = 70.0;

/// Default manual response time per inquiry (minutes)
pub const DEFAULT_MANUAL_RESPONSE_MINUTES: f64 = 4.0;

/// Default monthly hours spent on manual CRM work
pub const DEFAULT_CRM_MONTHLY_HOURS: f64 = 120.0;

/// Default share of CRM work that can be automated (%)
pub const DEFAULT_CRM_AUTOMATABLE_PCT: f64 = 40.0;

/// Default number of people doing the CRM work
pub const DEFAULT_PEOPLE_INVOLVED: u32 = 3;

/// Default hourly employee cost (ARS)
pub const DEFAULT_HOURLY_EMPLOYEE_COST: f64 = 2_000.0;

/// Default annual license cost (ARS)
pub const DEFAULT_ANNUAL_LICENSE_COST: f64 = 400_000.0;

/// Default one-off implementation cost (ARS)
pub const DEFAULT_IMPLEMENTATION_COST: f64 = 1_000_000.0;

/// Upper bound for every percentage input
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Operator mailbox that receives every submitted report
pub const DEFAULT_REPORT_RECIPIENT: &str = "hola@efficiency24.io";

/// Currency label used in the operator report
pub const REPORT_CURRENCY: &str = "ARS";
