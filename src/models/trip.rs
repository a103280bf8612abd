//! Trip request model and its fixed option sets

use crate::ViajeroError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending category used to scale cost estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Economy,
    Standard,
    Luxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Economy, BudgetTier::Standard, BudgetTier::Luxury];

    /// Label shown to the user and interpolated into queries and prompts
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BudgetTier::Economy => "Económico (Mochilero)",
            BudgetTier::Standard => "Moderado (Estándar)",
            BudgetTier::Luxury => "Alto (Lujo)",
        }
    }

    /// Short key accepted on the command line
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            BudgetTier::Economy => "economy",
            BudgetTier::Standard => "standard",
            BudgetTier::Luxury => "luxury",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetTier {
    type Err = ViajeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.key() == wanted || tier.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                ViajeroError::validation(format!(
                    "Presupuesto desconocido '{s}'. Opciones: economy, standard, luxury"
                ))
            })
    }
}

/// Trip interest, one of five fixed labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Gastronomy,
    History,
    Nature,
    Shopping,
    Art,
}

impl Interest {
    pub const ALL: [Interest; 5] = [
        Interest::Gastronomy,
        Interest::History,
        Interest::Nature,
        Interest::Shopping,
        Interest::Art,
    ];

    /// Preselected interests of a fresh form
    #[must_use]
    pub fn defaults() -> Vec<Interest> {
        vec![Interest::Gastronomy, Interest::History]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Interest::Gastronomy => "Gastronomía",
            Interest::History => "Historia",
            Interest::Nature => "Naturaleza",
            Interest::Shopping => "Compras",
            Interest::Art => "Arte",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Interest::Gastronomy => "gastronomy",
            Interest::History => "history",
            Interest::Nature => "nature",
            Interest::Shopping => "shopping",
            Interest::Art => "art",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Interest {
    type Err = ViajeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|interest| interest.key() == wanted || interest.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                ViajeroError::validation(format!(
                    "Interés desconocido '{s}'. Opciones: gastronomy, history, nature, shopping, art"
                ))
            })
    }
}

/// Validated input for one planning run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRequest {
    origin: String,
    destination: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    passengers: u8,
    budget: BudgetTier,
    interests: Vec<Interest>,
}

impl TripRequest {
    /// Build a request, rejecting trips that do not last at least one day.
    ///
    /// Interests are deduplicated keeping the order they were selected in.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        passengers: u8,
        budget: BudgetTier,
        interests: impl IntoIterator<Item = Interest>,
    ) -> crate::Result<Self> {
        if (end_date - start_date).num_days() < 1 {
            return Err(ViajeroError::validation(
                "La fecha de fin debe ser posterior a la de inicio.",
            ));
        }

        let mut unique = Vec::new();
        for interest in interests {
            if !unique.contains(&interest) {
                unique.push(interest);
            }
        }

        Ok(Self {
            origin: origin.into(),
            destination: destination.into(),
            start_date,
            end_date,
            passengers,
            budget,
            interests: unique,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn passengers(&self) -> u8 {
        self.passengers
    }

    pub fn budget(&self) -> BudgetTier {
        self.budget
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }

    /// Trip length in days (calendar difference, always at least 1)
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Interests as a comma separated list of labels
    #[must_use]
    pub fn interests_label(&self) -> String {
        self.interests
            .iter()
            .map(|interest| interest.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("standard", BudgetTier::Standard)]
    #[case("Moderado (Estándar)", BudgetTier::Standard)]
    #[case("LUXURY", BudgetTier::Luxury)]
    #[case("económico (mochilero)", BudgetTier::Economy)]
    fn test_budget_tier_parsing(#[case] input: &str, #[case] expected: BudgetTier) {
        assert_eq!(input.parse::<BudgetTier>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_budget_tier() {
        let err = "premium".parse::<BudgetTier>().unwrap_err();
        assert!(matches!(err, ViajeroError::Validation { .. }));
    }

    #[rstest]
    #[case("gastronomy", Interest::Gastronomy)]
    #[case("Gastronomía", Interest::Gastronomy)]
    #[case("arte", Interest::Art)]
    #[case("Nature", Interest::Nature)]
    fn test_interest_parsing(#[case] input: &str, #[case] expected: Interest) {
        assert_eq!(input.parse::<Interest>().unwrap(), expected);
    }

    #[rstest]
    #[case(date(2025, 6, 1), date(2025, 6, 8), 7)]
    #[case(date(2025, 6, 1), date(2025, 6, 2), 1)]
    #[case(date(2024, 2, 28), date(2024, 3, 1), 2)]
    #[case(date(2025, 12, 30), date(2026, 1, 4), 5)]
    fn test_duration_is_calendar_difference(
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
        #[case] days: i64,
    ) {
        let request =
            TripRequest::new("A", "B", start, end, 1, BudgetTier::Economy, Interest::defaults())
                .unwrap();
        assert_eq!(request.duration_days(), days);
    }

    #[rstest]
    #[case(date(2025, 6, 1), date(2025, 6, 1))]
    #[case(date(2025, 6, 8), date(2025, 6, 1))]
    fn test_rejects_non_positive_duration(#[case] start: NaiveDate, #[case] end: NaiveDate) {
        let err = TripRequest::new("A", "B", start, end, 1, BudgetTier::Economy, [])
            .unwrap_err();
        assert!(err.user_message().contains("posterior"));
    }

    #[test]
    fn test_interests_deduplicated_in_selection_order() {
        let request = TripRequest::new(
            "A",
            "B",
            date(2025, 6, 1),
            date(2025, 6, 3),
            2,
            BudgetTier::Standard,
            [Interest::History, Interest::Art, Interest::History],
        )
        .unwrap();
        assert_eq!(request.interests(), &[Interest::History, Interest::Art]);
        assert_eq!(request.interests_label(), "Historia, Arte");
    }
}
