//! Static guidance keyed by nutrition status (simplified from the 2023 WHO
//! guideline on wasting).

use crate::enums::NutritionStatus;

const SAM: &str = "Severe Acute Malnutrition (SAM): Urgent! Refer to the nearest health facility \
                   immediately for medical assessment and RUTF treatment. Continue breastfeeding. \
                   Monitor for oedema or complications.";

const MAM: &str = "Moderate Acute Malnutrition (MAM): Provide supplementary feeding (RUSF if \
                   available). Enhance diet with nutrient-rich foods. Follow up in 2 weeks. \
                   Promote hygiene and breastfeeding.";

const NORMAL: &str = "Normal Status: Continue exclusive breastfeeding (0-6 months) or balanced \
                      complementary feeding. Ensure play, vaccination, and regular check-ups.";

/// Appended to every report shown to a caregiver.
pub const DISCLAIMER: &str = "Disclaimer: This tool provides informational guidance based on WHO \
                              standards. It is not a substitute for professional medical advice. \
                              Always consult a healthcare provider.";

pub(crate) fn for_status(status: NutritionStatus) -> &'static str {
    match status {
        NutritionStatus::Sam => SAM,
        NutritionStatus::Mam => MAM,
        NutritionStatus::Normal => NORMAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_has_its_own_text() {
        assert!(for_status(NutritionStatus::Sam).contains("Refer"));
        assert!(for_status(NutritionStatus::Mam).contains("supplementary feeding"));
        assert!(for_status(NutritionStatus::Normal).contains("check-ups"));
    }
}
