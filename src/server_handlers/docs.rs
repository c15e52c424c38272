use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::config::ScoringConfig;
use crate::models::{Branch, Elective, Language, Minor};
use crate::survey::{
    FIELD_BRANCH, FIELD_BRANCH_LIKE, FIELD_DUAL_BRANCH, FIELD_PROGRAMMING_LANGUAGES, FIELD_SELECTED_LANGUAGES,
};

/// GET /
pub async fn index_handler() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("Form server is running.")
}

/// GET /help
/// Describe los campos que espera POST /api/submit y los minors disponibles
/// con la configuración actual.
pub async fn help_handler(config: web::Data<ScoringConfig>) -> impl Responder {
    let branches: Vec<&str> = Branch::ALL.iter().map(|b| b.code()).collect();
    let electives: Vec<&str> = Elective::ALL.iter().map(|e| e.field()).collect();
    let languages: Vec<&str> = Language::ALL.iter().map(|l| l.label()).collect();
    let mut minors: Vec<&str> = Minor::STANDARD.iter().map(|m| m.display_name()).collect();
    if config.include_management {
        minors.push(Minor::Management.display_name());
    }

    let help = json!({
        "description": "API de recomendación de minors. POST /api/submit acepta la encuesta como form-urlencoded o multipart/form-data y devuelve los 5 minors con mayor puntaje (porcentaje 0-100).",
        "fields": {
            FIELD_BRANCH: "código de la rama principal (ver 'branches')",
            FIELD_BRANCH_LIKE: "'yes' si le gusta su rama; cualquier otro valor cuenta como no",
            FIELD_DUAL_BRANCH: "código de la rama dual o 'None'",
            "<BRANCH>": "valoración numérica (0-5) de cada rama que no es la principal ni la dual",
            "<ELECTIVE>": "puntaje numérico de cada OPEL (ver 'electives')",
            FIELD_SELECTED_LANGUAGES: "lenguajes separados por comas, p. ej. 'Python, C++'",
            FIELD_PROGRAMMING_LANGUAGES: "campo repetido, un lenguaje por valor",
        },
        "branches": branches,
        "electives": electives,
        "languages": languages,
        "minors": minors,
        "example_body": "branch=CSE&branchLike=yes&dualBranch=None&MATHEMATICS=4&Entrepreneurship=5&selectedLanguages=Python%2C%20C%2B%2B",
        "example_response": {"success": true, "top_5_minors": {
            "Entrepreneurship": 40.0,
            "Computational Economics": 34.4,
            "Data Science": 32.86,
            "Supply Chain Analysis": 26.67,
            "Aeronautics": 0.0
        }},
    });

    HttpResponse::Ok().json(help)
}
