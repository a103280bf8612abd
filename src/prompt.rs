//! Report prompt template and rendering
//!
//! The template carries the whole report contract: a cost estimate and a
//! day-by-day itinerary. Nothing checks the model's answer against it.

use crate::models::TripRequest;
use crate::{Result, ViajeroError};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

const TEMPLATE_NAME: &str = "trip-report";

/// Embedded report template (Handlebars, no HTML escaping)
pub const TRIP_REPORT_TEMPLATE: &str = r#"Eres un experto planificador de viajes y agente de presupuestos.

SOLICITUD DEL USUARIO:
- Origen: {{origin}} -> Destino: {{destination}}
- Fechas: {{start_date}} al {{end_date}} ({{days}} días)
- Pasajeros: {{passengers}}
- Presupuesto: {{budget}}
- Intereses: {{interests}}

INFORMACIÓN RECUPERADA DE LA WEB (Úsala para estimar precios reales):
{{web_context}}

TAREA:
Genera un informe de viaje completo en formato Markdown.

SECCIÓN 1: COTIZACIÓN ESTIMADA (Para {{passengers}} personas)
- Analiza la "INFO VUELOS" y da un rango de precio estimado por persona y total. Menciona aerolíneas si aparecen.
- Analiza la "INFO HOTELES" y sugiere 2 opciones de alojamiento concretas con precio aproximado por noche.
- Calcula un estimado de comida y actividades según el nivel de presupuesto.
- **Total Estimado del Viaje:** (Suma todo).

SECCIÓN 2: ITINERARIO ({{days}} días)
- Crea un plan día a día optimizado lógicamente por ubicación.
- Incluye actividades basadas en intereses: {{interests}}.
- Considera el clima: {{web_context}}

IMPORTANTE: Si no encuentras precios exactos en la búsqueda, haz una estimación educada basada en tu conocimiento del mercado para esas fechas y aclara que es "estimado".
"#;

/// Values interpolated into the report template
#[derive(Debug, Clone, Serialize)]
pub struct PromptParams {
    pub origin: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub days: i64,
    pub passengers: u8,
    pub budget: String,
    pub interests: String,
    pub web_context: String,
}

impl PromptParams {
    pub fn new(request: &TripRequest, web_context: impl Into<String>) -> Self {
        Self {
            origin: request.origin().to_string(),
            destination: request.destination().to_string(),
            start_date: request.start_date().to_string(),
            end_date: request.end_date().to_string(),
            days: request.duration_days(),
            passengers: request.passengers(),
            budget: request.budget().label().to_string(),
            interests: request.interests_label(),
            web_context: web_context.into(),
        }
    }
}

/// Renders the report prompt
pub struct PromptRenderer {
    hbs: Handlebars<'static>,
}

impl PromptRenderer {
    /// Renderer for the embedded template
    pub fn new() -> Result<Self> {
        Self::with_template(TRIP_REPORT_TEMPLATE)
    }

    /// Renderer for a custom template using the same parameter names
    pub fn with_template(template: &str) -> Result<Self> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        hbs.register_template_string(TEMPLATE_NAME, template)
            .map_err(|e| ViajeroError::general(format!("Invalid prompt template: {e}")))?;
        Ok(Self { hbs })
    }

    pub fn render(&self, params: &PromptParams) -> Result<String> {
        let prompt = self
            .hbs
            .render(TEMPLATE_NAME, params)
            .map_err(|e| ViajeroError::synthesis(format!("Failed to render prompt: {e}")))?;
        debug!(prompt_len = prompt.len(), "render: prompt ready");
        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetTier, Interest};
    use chrono::NaiveDate;

    fn request() -> TripRequest {
        TripRequest::new(
            "Ciudad de México",
            "Madrid, España",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
            2,
            BudgetTier::Standard,
            [Interest::Gastronomy, Interest::History],
        )
        .unwrap()
    }

    #[test]
    fn test_params_from_request() {
        let params = PromptParams::new(&request(), "contexto");
        assert_eq!(params.days, 7);
        assert_eq!(params.passengers, 2);
        assert_eq!(params.start_date, "2025-06-01");
        assert_eq!(params.budget, "Moderado (Estándar)");
        assert_eq!(params.interests, "Gastronomía, Historia");
    }

    #[test]
    fn test_render_fills_every_slot() {
        let renderer = PromptRenderer::new().unwrap();
        let prompt = renderer
            .render(&PromptParams::new(&request(), "- INFO VUELOS ENCONTRADA: <850 USD> & más"))
            .unwrap();

        assert!(prompt.contains("Origen: Ciudad de México -> Destino: Madrid, España"));
        assert!(prompt.contains("Fechas: 2025-06-01 al 2025-06-08 (7 días)"));
        assert!(prompt.contains("Pasajeros: 2"));
        assert!(prompt.contains("COTIZACIÓN ESTIMADA (Para 2 personas)"));
        assert!(prompt.contains("ITINERARIO (7 días)"));
        assert!(prompt.contains("basadas en intereses: Gastronomía, Historia."));
        assert!(prompt.contains("\"estimado\""));
        assert!(!prompt.contains("{{"));
        // evidence is used for pricing and again for weather, unescaped
        assert_eq!(prompt.matches("<850 USD> & más").count(), 2);
    }

    #[test]
    fn test_report_contract_wording() {
        let prompt = PromptRenderer::new()
            .unwrap()
            .render(&PromptParams::new(&request(), "ctx"))
            .unwrap();

        assert!(prompt.starts_with("Eres un experto planificador de viajes y agente de presupuestos.\n"));
        for line in [
            "SOLICITUD DEL USUARIO:",
            "INFORMACIÓN RECUPERADA DE LA WEB (Úsala para estimar precios reales):",
            "Genera un informe de viaje completo en formato Markdown.",
            "- **Total Estimado del Viaje:** (Suma todo).",
            "- Crea un plan día a día optimizado lógicamente por ubicación.",
            "- Considera el clima: ctx",
        ] {
            assert!(prompt.contains(line), "missing line: {line}");
        }
        assert!(prompt.trim_end().ends_with("aclara que es \"estimado\"."));
    }

    #[test]
    fn test_unknown_placeholder_is_an_error() {
        let renderer = PromptRenderer::with_template("Hola {{nombre}}").unwrap();
        let err = renderer
            .render(&PromptParams::new(&request(), ""))
            .unwrap_err();
        assert!(matches!(err, ViajeroError::Synthesis { .. }));
    }
}
