// Estructuras de datos principales: ramas, electivos (OPEL), lenguajes y minors.
//
// Todos los registros son de esquema fijo: cada rama/electivo/lenguaje tiene su
// propio slot con valor por defecto 0, en lugar de un diccionario con claves
// libres.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Valor asignado a la rama seleccionada cuando al estudiante le gusta, y a la
/// rama dual.
pub const SENTINEL_LIKED: f64 = 7.5;
/// Valor asignado a la rama seleccionada cuando al estudiante no le gusta.
pub const SENTINEL_DISLIKED: f64 = 2.5;
/// Puntaje de un lenguaje marcado en la encuesta.
pub const LANGUAGE_SELECTED: f64 = 5.0;

/// Rama (carrera principal) del estudiante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Cse,
    Ece,
    Eee,
    Eni,
    Mechanical,
    Chemical,
    Civil,
    Economics,
    Mathematics,
    Physics,
    Chemistry,
    Biology,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Cse,
        Branch::Ece,
        Branch::Eee,
        Branch::Eni,
        Branch::Mechanical,
        Branch::Chemical,
        Branch::Civil,
        Branch::Economics,
        Branch::Mathematics,
        Branch::Physics,
        Branch::Chemistry,
        Branch::Biology,
    ];

    /// Código de la rama; también es el nombre del campo del formulario con su
    /// valoración.
    pub fn code(self) -> &'static str {
        match self {
            Branch::Cse => "CSE",
            Branch::Ece => "ECE",
            Branch::Eee => "EEE",
            Branch::Eni => "ENI",
            Branch::Mechanical => "MECHANICAL",
            Branch::Chemical => "CHEMICAL",
            Branch::Civil => "CIVIL",
            Branch::Economics => "ECONOMICS",
            Branch::Mathematics => "MATHEMATICS",
            Branch::Physics => "PHYSICS",
            Branch::Chemistry => "CHEMISTRY",
            Branch::Biology => "BIOLOGY",
        }
    }

    /// Busca una rama por código, sin distinguir mayúsculas. `None` para
    /// códigos desconocidos (p. ej. "None", "MnC", "PHARMACY").
    pub fn from_code(code: &str) -> Option<Branch> {
        let code = code.trim();
        Branch::ALL.into_iter().find(|b| b.code().eq_ignore_ascii_case(code))
    }
}

/// Programas electivos (OPEL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Elective {
    Aeronautics,
    Entrepreneurship,
    Finance,
    MaterialSciences,
    RoboticsAndAutomation,
    Management,
}

impl Elective {
    pub const ALL: [Elective; 6] = [
        Elective::Aeronautics,
        Elective::Entrepreneurship,
        Elective::Finance,
        Elective::MaterialSciences,
        Elective::RoboticsAndAutomation,
        Elective::Management,
    ];

    pub fn field(self) -> &'static str {
        match self {
            Elective::Aeronautics => "Aeronautics",
            Elective::Entrepreneurship => "Entrepreneurship",
            Elective::Finance => "Finance",
            Elective::MaterialSciences => "MaterialSciences",
            Elective::RoboticsAndAutomation => "RoboticsAndAutomation",
            Elective::Management => "Management",
        }
    }
}

/// Lenguajes de programación que ofrece la encuesta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Matlab,
    Simulink,
    Python,
    Cpp,
    C,
    R,
    Java,
    Go,
    Sql,
    JavaScript,
    Julia,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::Matlab,
        Language::Simulink,
        Language::Python,
        Language::Cpp,
        Language::C,
        Language::R,
        Language::Java,
        Language::Go,
        Language::Sql,
        Language::JavaScript,
        Language::Julia,
    ];

    /// Lenguajes de propósito general que suman en Computational Economics y
    /// Computing and Intelligence.
    pub const GENERAL_PURPOSE: [Language; 9] = [
        Language::C,
        Language::Cpp,
        Language::Python,
        Language::R,
        Language::Java,
        Language::Go,
        Language::Sql,
        Language::JavaScript,
        Language::Julia,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Language::Matlab => "Matlab",
            Language::Simulink => "Simulink",
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::R => "R",
            Language::Java => "Java",
            Language::Go => "Go",
            Language::Sql => "SQL",
            Language::JavaScript => "JavaScript",
            Language::Julia => "Julia",
        }
    }

    /// Coincidencia exacta con la etiqueta ("C" y "C++" son distintos).
    pub fn from_label(label: &str) -> Option<Language> {
        let label = label.trim();
        Language::ALL.into_iter().find(|l| l.label() == label)
    }
}

/// Valoración por rama. La rama seleccionada y la dual llevan los valores
/// centinela; el resto, lo que indicó el estudiante.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BranchScores {
    pub cse: f64,
    pub ece: f64,
    pub eee: f64,
    pub eni: f64,
    pub mechanical: f64,
    pub chemical: f64,
    pub civil: f64,
    pub economics: f64,
    pub mathematics: f64,
    pub physics: f64,
    pub chemistry: f64,
    pub biology: f64,
}

impl BranchScores {
    pub fn get(&self, branch: Branch) -> f64 {
        match branch {
            Branch::Cse => self.cse,
            Branch::Ece => self.ece,
            Branch::Eee => self.eee,
            Branch::Eni => self.eni,
            Branch::Mechanical => self.mechanical,
            Branch::Chemical => self.chemical,
            Branch::Civil => self.civil,
            Branch::Economics => self.economics,
            Branch::Mathematics => self.mathematics,
            Branch::Physics => self.physics,
            Branch::Chemistry => self.chemistry,
            Branch::Biology => self.biology,
        }
    }

    pub fn set(&mut self, branch: Branch, value: f64) {
        let slot = match branch {
            Branch::Cse => &mut self.cse,
            Branch::Ece => &mut self.ece,
            Branch::Eee => &mut self.eee,
            Branch::Eni => &mut self.eni,
            Branch::Mechanical => &mut self.mechanical,
            Branch::Chemical => &mut self.chemical,
            Branch::Civil => &mut self.civil,
            Branch::Economics => &mut self.economics,
            Branch::Mathematics => &mut self.mathematics,
            Branch::Physics => &mut self.physics,
            Branch::Chemistry => &mut self.chemistry,
            Branch::Biology => &mut self.biology,
        };
        *slot = value;
    }
}

/// Puntajes OPEL. `management` solo se usa si el minor Management está activo.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElectiveScores {
    pub aeronautics: f64,
    pub entrepreneurship: f64,
    pub finance: f64,
    pub material_sciences: f64,
    pub robotics_and_automation: f64,
    pub management: f64,
}

impl ElectiveScores {
    pub fn get(&self, elective: Elective) -> f64 {
        match elective {
            Elective::Aeronautics => self.aeronautics,
            Elective::Entrepreneurship => self.entrepreneurship,
            Elective::Finance => self.finance,
            Elective::MaterialSciences => self.material_sciences,
            Elective::RoboticsAndAutomation => self.robotics_and_automation,
            Elective::Management => self.management,
        }
    }

    pub fn set(&mut self, elective: Elective, value: f64) {
        let slot = match elective {
            Elective::Aeronautics => &mut self.aeronautics,
            Elective::Entrepreneurship => &mut self.entrepreneurship,
            Elective::Finance => &mut self.finance,
            Elective::MaterialSciences => &mut self.material_sciences,
            Elective::RoboticsAndAutomation => &mut self.robotics_and_automation,
            Elective::Management => &mut self.management,
        };
        *slot = value;
    }
}

/// 5 por cada lenguaje marcado, 0 si no.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LanguageScores {
    pub matlab: f64,
    pub simulink: f64,
    pub python: f64,
    pub cpp: f64,
    pub c: f64,
    pub r: f64,
    pub java: f64,
    pub go: f64,
    pub sql: f64,
    pub javascript: f64,
    pub julia: f64,
}

impl LanguageScores {
    pub fn get(&self, language: Language) -> f64 {
        match language {
            Language::Matlab => self.matlab,
            Language::Simulink => self.simulink,
            Language::Python => self.python,
            Language::Cpp => self.cpp,
            Language::C => self.c,
            Language::R => self.r,
            Language::Java => self.java,
            Language::Go => self.go,
            Language::Sql => self.sql,
            Language::JavaScript => self.javascript,
            Language::Julia => self.julia,
        }
    }

    pub fn set(&mut self, language: Language, value: f64) {
        let slot = match language {
            Language::Matlab => &mut self.matlab,
            Language::Simulink => &mut self.simulink,
            Language::Python => &mut self.python,
            Language::Cpp => &mut self.cpp,
            Language::C => &mut self.c,
            Language::R => &mut self.r,
            Language::Java => &mut self.java,
            Language::Go => &mut self.go,
            Language::Sql => &mut self.sql,
            Language::JavaScript => &mut self.javascript,
            Language::Julia => &mut self.julia,
        };
        *slot = value;
    }

    /// Suma de los lenguajes de propósito general.
    pub fn general_purpose_total(&self) -> f64 {
        Language::GENERAL_PURPOSE.iter().map(|l| self.get(*l)).sum()
    }
}

/// Entradas ya normalizadas de una encuesta. El motor solo las lee.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurveyInputs {
    pub branch: BranchScores,
    pub elective: ElectiveScores,
    pub language: LanguageScores,
}

/// Minors candidatos, en orden de declaración (el desempate del ranking
/// respeta este orden).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Minor {
    Aeronautics,
    ComputationalEconomics,
    ComputingAndIntelligence,
    DataScience,
    Entrepreneurship,
    Finance,
    MaterialScienceEngineering,
    Physics,
    RoboticsAndAutomation,
    SupplyChainAnalysis,
    Semiconductors,
    Management,
}

impl Minor {
    /// Los 11 minors de siempre; Management se agrega aparte según configuración.
    pub const STANDARD: [Minor; 11] = [
        Minor::Aeronautics,
        Minor::ComputationalEconomics,
        Minor::ComputingAndIntelligence,
        Minor::DataScience,
        Minor::Entrepreneurship,
        Minor::Finance,
        Minor::MaterialScienceEngineering,
        Minor::Physics,
        Minor::RoboticsAndAutomation,
        Minor::SupplyChainAnalysis,
        Minor::Semiconductors,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Minor::Aeronautics => "Aeronautics",
            Minor::ComputationalEconomics => "Computational Economics",
            Minor::ComputingAndIntelligence => "Computing and Intelligence",
            Minor::DataScience => "Data Science",
            Minor::Entrepreneurship => "Entrepreneurship",
            Minor::Finance => "Finance",
            Minor::MaterialScienceEngineering => "Material Science Engineering",
            Minor::Physics => "Physics",
            Minor::RoboticsAndAutomation => "Robotics And Automation",
            Minor::SupplyChainAnalysis => "Supply Chain Analysis",
            Minor::Semiconductors => "Semiconductors",
            Minor::Management => "Management",
        }
    }
}

/// Resultado por minor: porcentaje en [0, 100].
#[derive(Debug, Clone, PartialEq)]
pub struct MinorScore {
    pub name: String,
    pub score: f64,
}

/// Top de minors ya ordenado. Se serializa como objeto JSON `{nombre: puntaje}`
/// conservando el orden del ranking (serde_json::Map ordenaría las claves).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopMinors(pub Vec<MinorScore>);

impl TopMinors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MinorScore> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|m| m.name == name).map(|m| m.score)
    }
}

impl Serialize for TopMinors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for m in &self.0 {
            map.serialize_entry(&m.name, &m.score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_from_code_ignores_case_and_unknowns() {
        assert_eq!(Branch::from_code("cse"), Some(Branch::Cse));
        assert_eq!(Branch::from_code(" MECHANICAL "), Some(Branch::Mechanical));
        assert_eq!(Branch::from_code("None"), None);
        assert_eq!(Branch::from_code("PHARMACY"), None);
    }

    #[test]
    fn language_labels_are_exact() {
        assert_eq!(Language::from_label("C++"), Some(Language::Cpp));
        assert_eq!(Language::from_label("C"), Some(Language::C));
        assert_eq!(Language::from_label("python"), None);
    }

    #[test]
    fn top_minors_serializes_in_rank_order() {
        let top = TopMinors(vec![
            MinorScore { name: "Finance".to_string(), score: 100.0 },
            MinorScore { name: "Data Science".to_string(), score: 21.43 },
        ]);
        let text = serde_json::to_string(&top).unwrap();
        assert_eq!(text, r#"{"Finance":100.0,"Data Science":21.43}"#);
    }
}
