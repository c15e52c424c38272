// Representación cruda de un formulario enviado: pares (clave, valor) en el
// orden recibido. Las claves pueden repetirse (checkboxes de lenguajes).

use crate::error::SubmitError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    fields: Vec<(String, String)>,
}

impl RawSubmission {
    /// Decodifica un cuerpo `application/x-www-form-urlencoded`.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, SubmitError> {
        let fields: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
        Ok(RawSubmission { fields })
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Primer valor de la clave (igual que un `form.get` clásico).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Todos los valores de la clave, en orden.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields.iter().filter(move |(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RawSubmission {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urlencoded_keeps_repeated_keys() {
        let raw = RawSubmission::from_urlencoded(
            b"branch=CSE&programmingLanguages=Python&programmingLanguages=C%2B%2B&CIVIL=3",
        )
        .unwrap();
        assert_eq!(raw.get("branch"), Some("CSE"));
        assert_eq!(raw.get("CIVIL"), Some("3"));
        let langs: Vec<&str> = raw.get_all("programmingLanguages").collect();
        assert_eq!(langs, vec!["Python", "C++"]);
        assert_eq!(raw.get("missing"), None);
    }

    #[test]
    fn collected_pairs_keep_order() {
        let raw: RawSubmission =
            [("programmingLanguages", "C"), ("branch", "ECE"), ("programmingLanguages", "Go")]
                .into_iter()
                .collect();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw.get("branch"), Some("ECE"));
        assert_eq!(raw.get_all("programmingLanguages").collect::<Vec<_>>(), vec!["C", "Go"]);
    }

    #[test]
    fn empty_body_is_empty_submission() {
        let raw = RawSubmission::from_urlencoded(b"").unwrap();
        assert!(raw.is_empty());
    }
}
