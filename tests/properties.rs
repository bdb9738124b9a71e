use medpredict_engine::{
    ranking::{predict, DEFAULT_MAX_PREDICTIONS},
    suggest::{suggest_symptoms, DEFAULT_MAX_SUGGESTIONS},
    Catalog, FixedJitter, SubstringRanker, UniformJitter,
};
use proptest::prelude::*;

fn symptom_input() -> impl Strategy<Value = Vec<String>> {
    let catalog = Catalog::builtin();
    let known: Vec<String> = catalog.symptoms.iter().map(|s| s.name.clone()).collect();

    prop::collection::vec(
        prop_oneof![
            prop::sample::select(known),
            "[a-zA-Z ]{1,12}",
        ],
        1..6,
    )
}

proptest! {
    #[test]
    fn ranker_returns_one_to_three_sorted(input in symptom_input(), seed in any::<u64>()) {
        let catalog = Catalog::builtin();
        let ranker = SubstringRanker::new(UniformJitter::seeded(seed));

        let predictions = predict(&ranker, &input, &catalog.conditions, DEFAULT_MAX_PREDICTIONS).unwrap();

        prop_assert!(!predictions.is_empty());
        prop_assert!(predictions.len() <= 3);
        prop_assert!(predictions.windows(2).all(|w| w[0].confidence >= w[1].confidence));
        prop_assert!(predictions.iter().all(|p| p.confidence <= 95));
    }

    #[test]
    fn unmatched_input_gets_consultation(word in "[xq]{3,8}") {
        let catalog = Catalog::builtin();
        let ranker = SubstringRanker::new(FixedJitter::zero());

        let predictions = predict(&ranker, &[word], &catalog.conditions, DEFAULT_MAX_PREDICTIONS).unwrap();

        prop_assert_eq!(predictions.len(), 1);
        prop_assert_eq!(predictions[0].confidence, 65);
        prop_assert!(predictions[0].is_general_consultation());
    }

    #[test]
    fn suggestions_are_ordered_substring_matches(query in "[a-zA-Z ]{0,6}") {
        let catalog = Catalog::builtin();
        let found = suggest_symptoms(&catalog.symptoms, &query, DEFAULT_MAX_SUGGESTIONS);

        if query.chars().count() < 2 {
            prop_assert!(found.is_empty());
        } else {
            prop_assert!(found.len() <= 10);
            let needle = query.to_lowercase();
            prop_assert!(found.iter().all(|name| name.to_lowercase().contains(&needle)));

            let positions: Vec<usize> = found
                .iter()
                .map(|name| catalog.symptoms.iter().position(|s| &s.name == name).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn influenza_outranks_common_cold_without_jitter() {
    let catalog = Catalog::builtin();
    let ranker = SubstringRanker::new(FixedJitter::zero());
    let input = vec!["fever".to_string(), "cough".to_string()];

    let predictions = predict(&ranker, &input, &catalog.conditions, DEFAULT_MAX_PREDICTIONS).unwrap();
    let flu = predictions.iter().position(|p| p.disease == "Influenza").unwrap();
    let cold = predictions.iter().position(|p| p.disease == "Common Cold").unwrap();

    assert!(flu < cold);
    assert_eq!(predictions[flu].confidence, 40);
    assert_eq!(predictions[cold].confidence, 20);
}
