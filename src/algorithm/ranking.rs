use crate::models::{MinorScore, TopMinors};

/// Cantidad de minors que se devuelven.
pub const TOP_K: usize = 5;

/// Redondeo a 2 decimales (mitades lejos de cero).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Ordena de mayor a menor y toma los primeros `k`. `sort_by` es estable, así
/// que los empates conservan el orden de declaración.
pub fn rank_top(mut scores: Vec<MinorScore>, k: usize) -> TopMinors {
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores.truncate(k);
    for s in scores.iter_mut() {
        s.score = round2(s.score);
    }
    TopMinors(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(name: &str, score: f64) -> MinorScore {
        MinorScore { name: name.to_string(), score }
    }

    #[test]
    fn ties_keep_input_order() {
        let top = rank_top(vec![ms("a", 0.0), ms("b", 10.0), ms("c", 0.0), ms("d", 10.0)], 3);
        let names: Vec<&str> = top.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "a"]);
    }

    #[test]
    fn rounds_after_sorting() {
        let top = rank_top(vec![ms("x", 21.428571), ms("y", 21.431)], 5);
        assert_eq!(top.0[0].name, "y");
        assert_eq!(top.0[0].score, 21.43);
        assert_eq!(top.0[1].score, 21.43);
    }

    #[test]
    fn fewer_than_k_returns_all() {
        assert_eq!(rank_top(vec![ms("solo", 1.0)], TOP_K).len(), 1);
        assert!(rank_top(Vec::new(), TOP_K).is_empty());
    }
}
