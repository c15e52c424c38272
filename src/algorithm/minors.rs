// Fórmulas por minor. Cada una sigue el mismo patrón: un gate opcional que
// devuelve 0 de inmediato, y luego la suma de los términos dividida por una
// constante fija, expresada como porcentaje.

use crate::models::{
    BranchScores, ElectiveScores, Language, LanguageScores, SENTINEL_DISLIKED, SENTINEL_LIKED,
};

pub type MinorFn = fn(&BranchScores, &ElectiveScores, &LanguageScores) -> f64;

/// Porcentaje `total / max * 100`, acotado a [0, 100].
pub fn percentage(total: f64, max_score: f64) -> f64 {
    if max_score <= 0.0 {
        return 0.0;
    }
    (total / max_score * 100.0).clamp(0.0, 100.0)
}

pub fn aeronautics(
    branch: &BranchScores,
    elective: &ElectiveScores,
    language: &LanguageScores,
) -> f64 {
    if elective.aeronautics == 0.0 {
        return 0.0;
    }
    let total = elective.aeronautics
        + branch.eee
        + branch.mechanical
        + language.get(Language::Matlab)
        + language.get(Language::Simulink)
        + language.get(Language::Python)
        + language.get(Language::Cpp);
    percentage(total, 37.5)
}

pub fn computational_economics(
    branch: &BranchScores,
    _elective: &ElectiveScores,
    language: &LanguageScores,
) -> f64 {
    let total =
        branch.economics + branch.cse + branch.mathematics + language.general_purpose_total();
    percentage(total, 62.5)
}

/// Gate: CSE fue la rama seleccionada o la dual (tiene un valor centinela).
///
/// La comparación es por valor: una valoración escrita de 2.5 o 7.5 para CSE
/// también bloquea el minor aunque CSE no sea la seleccionada ni la dual.
pub fn computing_and_intelligence(
    branch: &BranchScores,
    _elective: &ElectiveScores,
    language: &LanguageScores,
) -> f64 {
    if branch.cse == SENTINEL_LIKED || branch.cse == SENTINEL_DISLIKED {
        return 0.0;
    }
    percentage(branch.cse + language.general_purpose_total(), 50.0)
}

pub fn data_science(
    branch: &BranchScores,
    _elective: &ElectiveScores,
    _language: &LanguageScores,
) -> f64 {
    percentage(branch.mathematics + branch.cse, 35.0)
}

pub fn entrepreneurship(
    branch: &BranchScores,
    elective: &ElectiveScores,
    _language: &LanguageScores,
) -> f64 {
    if elective.entrepreneurship == 0.0 {
        return 0.0;
    }
    percentage(elective.entrepreneurship + branch.economics, 12.5)
}

pub fn finance(
    _branch: &BranchScores,
    elective: &ElectiveScores,
    _language: &LanguageScores,
) -> f64 {
    if elective.finance == 0.0 {
        return 0.0;
    }
    percentage(elective.finance, 5.0)
}

pub fn material_science_engineering(
    branch: &BranchScores,
    elective: &ElectiveScores,
    _language: &LanguageScores,
) -> f64 {
    if elective.material_sciences == 0.0 {
        return 0.0;
    }
    let total = elective.material_sciences
        + branch.chemical
        + branch.mechanical
        + branch.chemistry
        + branch.physics;
    percentage(total, 30.0)
}

/// Gate: Physics seleccionada y con gusto (7.5) o suprimida / sin interés (0).
pub fn physics(
    branch: &BranchScores,
    _elective: &ElectiveScores,
    _language: &LanguageScores,
) -> f64 {
    if branch.physics == SENTINEL_LIKED || branch.physics == 0.0 {
        return 0.0;
    }
    percentage(branch.physics + branch.eee + branch.eni + branch.ece, 22.5)
}

pub fn robotics_and_automation(
    branch: &BranchScores,
    elective: &ElectiveScores,
    _language: &LanguageScores,
) -> f64 {
    if elective.robotics_and_automation == 0.0 {
        return 0.0;
    }
    let total = elective.robotics_and_automation
        + branch.ece
        + branch.eee
        + branch.eni
        + branch.mechanical;
    percentage(total, 27.5)
}

pub fn supply_chain_analysis(
    branch: &BranchScores,
    _elective: &ElectiveScores,
    _language: &LanguageScores,
) -> f64 {
    percentage(branch.mathematics + branch.mechanical, 15.0)
}

pub fn semiconductors(
    branch: &BranchScores,
    _elective: &ElectiveScores,
    _language: &LanguageScores,
) -> f64 {
    percentage(branch.eee + branch.ece + branch.eni, 35.0)
}

pub fn management(
    branch: &BranchScores,
    elective: &ElectiveScores,
    _language: &LanguageScores,
) -> f64 {
    if elective.management == 0.0 {
        return 0.0;
    }
    percentage(elective.management + branch.economics + branch.mechanical, 20.0)
}
