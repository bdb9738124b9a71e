use crate::core::Symptom;

/// Queries shorter than this (in characters) yield no suggestions
pub const MIN_QUERY_CHARS: usize = 2;

/// Default cap on returned suggestions
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Symptom names containing `query` (case-insensitive), in table order, at most `limit`
pub fn suggest_symptoms(symptoms: &[Symptom], query: &str, limit: usize) -> Vec<String> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    symptoms
        .iter()
        .filter(|symptom| symptom.name.to_lowercase().contains(&needle))
        .map(|symptom| symptom.name.clone())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::SymptomSeverity;

    #[test]
    fn test_short_query() {
        let catalog = Catalog::builtin();
        assert!(suggest_symptoms(&catalog.symptoms, "", 10).is_empty());
        assert!(suggest_symptoms(&catalog.symptoms, "h", 10).is_empty());
    }

    #[test]
    fn test_case_insensitive_in_table_order() {
        let catalog = Catalog::builtin();
        let found = suggest_symptoms(&catalog.symptoms, "PAIN", 10);
        assert_eq!(found, vec!["Chest pain", "Joint pain", "Abdominal pain", "Back pain"]);
    }

    #[test]
    fn test_substring_not_only_prefix() {
        let catalog = Catalog::builtin();
        let found = suggest_symptoms(&catalog.symptoms, "ache", 10);
        assert_eq!(found, vec!["Headache", "Muscle aches"]);
    }

    #[test]
    fn test_limit() {
        let symptoms: Vec<Symptom> = (0..15)
            .map(|i| Symptom::new(format!("Ache {}", i), "general", SymptomSeverity::Mild))
            .collect();

        let found = suggest_symptoms(&symptoms, "ache", DEFAULT_MAX_SUGGESTIONS);
        assert_eq!(found.len(), 10);
        assert_eq!(found[0], "Ache 0");
        assert_eq!(found[9], "Ache 9");
    }

    #[test]
    fn test_two_char_multibyte_query() {
        let symptoms = vec![Symptom::new("Ödem", "general", SymptomSeverity::Mild)];
        assert_eq!(suggest_symptoms(&symptoms, "öd", 10), vec!["Ödem"]);
    }
}
