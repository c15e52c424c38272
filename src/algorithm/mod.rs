// Motor de puntajes y ranking de minors.
pub mod minors;
mod ranking;

pub use ranking::{TOP_K, rank_top, round2};

use crate::config::{PhysicsDualPolicy, ScoringConfig};
use crate::models::{Minor, MinorScore, SurveyInputs, TopMinors};
use crate::survey::Survey;

/// Puntaje sin redondear de un minor.
pub fn score_minor(minor: Minor, inputs: &SurveyInputs) -> f64 {
    let f: minors::MinorFn = match minor {
        Minor::Aeronautics => minors::aeronautics,
        Minor::ComputationalEconomics => minors::computational_economics,
        Minor::ComputingAndIntelligence => minors::computing_and_intelligence,
        Minor::DataScience => minors::data_science,
        Minor::Entrepreneurship => minors::entrepreneurship,
        Minor::Finance => minors::finance,
        Minor::MaterialScienceEngineering => minors::material_science_engineering,
        Minor::Physics => minors::physics,
        Minor::RoboticsAndAutomation => minors::robotics_and_automation,
        Minor::SupplyChainAnalysis => minors::supply_chain_analysis,
        Minor::Semiconductors => minors::semiconductors,
        Minor::Management => minors::management,
    };
    f(&inputs.branch, &inputs.elective, &inputs.language)
}

/// Minors candidatos para una encuesta, en orden de declaración.
pub fn candidates(config: &ScoringConfig, survey: &Survey) -> Vec<Minor> {
    let mut out: Vec<Minor> = Minor::STANDARD.to_vec();
    if config.physics_dual == PhysicsDualPolicy::Exclude && survey.physics_is_dual() {
        out.retain(|m| *m != Minor::Physics);
    }
    if config.include_management {
        out.push(Minor::Management);
    }
    out
}

/// Puntajes de todos los candidatos, sin ordenar ni redondear.
pub fn score_all(minors: &[Minor], inputs: &SurveyInputs) -> Vec<MinorScore> {
    minors
        .iter()
        .map(|m| MinorScore {
            name: m.display_name().to_string(),
            score: score_minor(*m, inputs),
        })
        .collect()
}

/// Flujo completo sobre una encuesta ya normalizada: candidatos, puntajes y
/// top 5.
pub fn recommend(config: &ScoringConfig, survey: &Survey) -> TopMinors {
    let minors = candidates(config, survey);
    let scores = score_all(&minors, &survey.inputs);
    rank_top(scores, TOP_K)
}
