//! Presentation of a finished plan
//!
//! Two panes: the report with the estimate disclaimer, and the raw evidence.
//! Neither text is touched on its way through.

use crate::models::TripReport;
use serde::Serialize;
use std::fmt;

pub const REPORT_TITLE: &str = "✈️ Tu Plan de Viaje";
pub const EVIDENCE_TITLE: &str = "🔍 Datos Encontrados";

pub const ESTIMATE_DISCLAIMER: &str = "Nota: Los precios son estimaciones basadas en búsquedas web recientes. Verifica en las aerolíneas/hoteles directamente.";
pub const EVIDENCE_PREAMBLE: &str =
    "Esta es la información cruda que la IA encontró en internet para armar tu plan:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPane {
    pub title: &'static str,
    pub report: TripReport,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidencePane {
    pub title: &'static str,
    pub preamble: &'static str,
    pub evidence: String,
}

/// What the user sees at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub report: ReportPane,
    pub evidence: EvidencePane,
}

#[must_use]
pub fn present(report: TripReport, evidence: String) -> Presentation {
    Presentation {
        report: ReportPane {
            title: REPORT_TITLE,
            report,
            disclaimer: ESTIMATE_DISCLAIMER,
        },
        evidence: EvidencePane {
            title: EVIDENCE_TITLE,
            preamble: EVIDENCE_PREAMBLE,
            evidence,
        },
    }
}

impl fmt::Display for ReportPane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.report)?;
        writeln!(f)?;
        writeln!(f, "> ⚠️ {}", self.disclaimer)
    }
}

impl fmt::Display for EvidencePane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.preamble)?;
        writeln!(f)?;
        let fence = code_fence(&self.evidence);
        writeln!(f, "{fence}text")?;
        writeln!(f, "{}", self.evidence)?;
        writeln!(f, "{fence}")
    }
}

/// Backtick fence longer than any backtick run inside `text`
fn code_fence(text: &str) -> String {
    let longest = text.split(|c| c != '`').map(str::len).max().unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.report)?;
        write!(f, "{}", self.evidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texts_pass_through_untouched() {
        let report = TripReport::new("## Cotización\n**Total Estimado del Viaje:** 4,200 USD");
        let evidence = "- INFO VUELOS ENCONTRADA: <b>raw</b>\n- CLIMA PRONOSTICADO: ?".to_string();

        let presentation = present(report.clone(), evidence.clone());

        assert_eq!(presentation.report.report, report);
        assert_eq!(presentation.evidence.evidence, evidence);
        assert_eq!(presentation.report.disclaimer, ESTIMATE_DISCLAIMER);
    }

    #[test]
    fn test_terminal_rendering_has_both_panes() {
        let presentation = present(TripReport::new("Día 1: Prado"), "evidencia".to_string());
        let rendered = presentation.to_string();

        let report_at = rendered.find(REPORT_TITLE).unwrap();
        let evidence_at = rendered.find(EVIDENCE_TITLE).unwrap();
        assert!(report_at < evidence_at);
        assert!(rendered.contains("Día 1: Prado\n"));
        assert!(rendered.contains("```text\nevidencia\n```"));
        assert!(rendered.contains(ESTIMATE_DISCLAIMER));
    }

    #[test]
    fn test_fence_outgrows_backticks_in_evidence() {
        let evidence = "snippet\n```\nstill evidence ````".to_string();
        let rendered = present(TripReport::new("md"), evidence.clone()).evidence.to_string();

        assert!(rendered.contains(&format!("`````text\n{evidence}\n`````")));
        assert_eq!(code_fence("plain"), "```");
        assert_eq!(code_fence("a `b` c"), "```");
    }

    #[test]
    fn test_json_shape() {
        let presentation = present(TripReport::new("md"), "ev".to_string());
        let json = serde_json::to_value(&presentation).unwrap();
        assert_eq!(json["report"]["report"], "md");
        assert_eq!(json["evidence"]["evidence"], "ev");
        assert_eq!(json["report"]["title"], REPORT_TITLE);
    }
}
