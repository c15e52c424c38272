// Configuración del proceso: dirección de escucha y opciones del motor de
// puntajes. Se lee del entorno después de cargar `.env` (si existe).

use std::env;

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Carga `.env` si existe; si no, no pasa nada.
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Qué hacer cuando el estudiante marca Physics como rama dual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhysicsDualPolicy {
    /// La rama Physics queda en 0 y el minor Physics puntúa 0 (gate).
    #[default]
    Suppress,
    /// El minor Physics se saca de los candidatos.
    Exclude,
}

impl PhysicsDualPolicy {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "suppress" | "zero" => Ok(PhysicsDualPolicy::Suppress),
            "exclude" => Ok(PhysicsDualPolicy::Exclude),
            other => Err(ConfigError::PhysicsDualPolicy(other.to_string())),
        }
    }
}

/// Opciones del motor. Inmutable; se comparte entre workers vía `web::Data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoringConfig {
    pub physics_dual: PhysicsDualPolicy,
    pub include_management: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub scoring: ScoringConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            scoring: ScoringConfig::default(),
        }
    }
}

impl AppConfig {
    /// Lee las variables del proceso. Llamar antes a `load_dotenv` si se
    /// quiere considerar `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda inyectable, para
    /// pruebas sin tocar el entorno real.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match non_empty("PORT") {
            Some(p) => p.trim().parse::<u16>().map_err(|_| ConfigError::Port(p.clone()))?,
            None => DEFAULT_PORT,
        };
        let physics_dual = match non_empty("MINORS_PHYSICS_DUAL") {
            Some(v) => PhysicsDualPolicy::parse(&v)?,
            None => PhysicsDualPolicy::default(),
        };
        let include_management = match non_empty("MINORS_INCLUDE_MANAGEMENT") {
            Some(v) => parse_bool("MINORS_INCLUDE_MANAGEMENT", &v)?,
            None => false,
        };

        Ok(AppConfig {
            host,
            port,
            scoring: ScoringConfig { physics_dual, include_management },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Bool { key, value: value.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn reads_port_and_scoring_options() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MINORS_PHYSICS_DUAL", "Exclude"),
            ("MINORS_INCLUDE_MANAGEMENT", "yes"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.scoring.physics_dual, PhysicsDualPolicy::Exclude);
        assert!(cfg.scoring.include_management);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("PORT", "cinco mil")])),
            Err(ConfigError::Port(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("MINORS_PHYSICS_DUAL", "maybe")])),
            Err(ConfigError::PhysicsDualPolicy(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("MINORS_INCLUDE_MANAGEMENT", "si")])),
            Err(ConfigError::Bool { .. })
        ));
    }
}
