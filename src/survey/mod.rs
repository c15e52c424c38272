// Normalizador de la encuesta: convierte los campos crudos del formulario en
// los tres registros de puntajes (ramas, OPEL, lenguajes). Nunca falla: todo
// valor numérico ausente o inválido queda en 0.

mod form;

pub use form::RawSubmission;

use crate::models::{
    Branch, BranchScores, Elective, ElectiveScores, LANGUAGE_SELECTED, Language, LanguageScores,
    SENTINEL_DISLIKED, SENTINEL_LIKED, SurveyInputs,
};

pub const FIELD_BRANCH: &str = "branch";
pub const FIELD_BRANCH_LIKE: &str = "branchLike";
pub const FIELD_DUAL_BRANCH: &str = "dualBranch";
pub const FIELD_SELECTED_LANGUAGES: &str = "selectedLanguages";
pub const FIELD_PROGRAMMING_LANGUAGES: &str = "programmingLanguages";

/// Encuesta normalizada: las entradas del motor más la rama seleccionada y la
/// dual ya resueltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Survey {
    pub selected: Option<Branch>,
    pub likes_selected: bool,
    pub dual: Option<Branch>,
    pub inputs: SurveyInputs,
}

impl Survey {
    /// Physics fue marcada como rama dual (su slot quedó suprimido a 0).
    pub fn physics_is_dual(&self) -> bool {
        self.dual == Some(Branch::Physics)
    }
}

/// Convierte un campo numérico a `f64`. Ausente, vacío, no numérico, no
/// finito o negativo => 0.
pub fn coerce_number(value: Option<&str>) -> f64 {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => match v.parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => n,
            _ => 0.0,
        },
        None => 0.0,
    }
}

/// Normaliza un formulario completo.
pub fn normalize(raw: &RawSubmission) -> Survey {
    let selected = raw.get(FIELD_BRANCH).and_then(Branch::from_code);
    let likes_selected = raw
        .get(FIELD_BRANCH_LIKE)
        .map(|v| v.trim().eq_ignore_ascii_case("yes"))
        .unwrap_or(false);
    // La dual igual a la seleccionada no cuenta: solo una rama lleva el
    // centinela de seleccionada.
    let dual = raw
        .get(FIELD_DUAL_BRANCH)
        .and_then(Branch::from_code)
        .filter(|d| Some(*d) != selected);

    let branch = branch_scores(raw, selected, likes_selected, dual);
    let elective = elective_scores(raw);
    let language = language_scores(raw);

    Survey {
        selected,
        likes_selected,
        dual,
        inputs: SurveyInputs { branch, elective, language },
    }
}

/// Rama seleccionada y dual primero; las valoraciones del resto después, sin
/// leer nunca el campo crudo de una rama que ya tiene centinela.
pub fn branch_scores(
    raw: &RawSubmission,
    selected: Option<Branch>,
    likes_selected: bool,
    dual: Option<Branch>,
) -> BranchScores {
    let mut scores = BranchScores::default();

    if let Some(sel) = selected {
        scores.set(sel, if likes_selected { SENTINEL_LIKED } else { SENTINEL_DISLIKED });
    }
    match dual {
        Some(Branch::Physics) => scores.set(Branch::Physics, 0.0),
        Some(d) => scores.set(d, SENTINEL_LIKED),
        None => {}
    }

    for b in Branch::ALL {
        if Some(b) == selected || Some(b) == dual {
            continue;
        }
        scores.set(b, coerce_number(raw.get(b.code())));
    }
    scores
}

pub fn elective_scores(raw: &RawSubmission) -> ElectiveScores {
    let mut scores = ElectiveScores::default();
    for e in Elective::ALL {
        scores.set(e, coerce_number(raw.get(e.field())));
    }
    scores
}

/// Une `selectedLanguages` (texto separado por comas) y los valores repetidos
/// de `programmingLanguages`. Nombres desconocidos se ignoran.
pub fn language_scores(raw: &RawSubmission) -> LanguageScores {
    let mut scores = LanguageScores::default();
    let listed = raw
        .get_all(FIELD_SELECTED_LANGUAGES)
        .chain(raw.get_all(FIELD_PROGRAMMING_LANGUAGES))
        .flat_map(|v| v.split(','));
    for name in listed {
        if let Some(lang) = Language::from_label(name) {
            scores.set(lang, LANGUAGE_SELECTED);
        }
    }
    scores
}
