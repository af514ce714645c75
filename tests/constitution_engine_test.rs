use wuxing_qingyang::core::recommendation::recommendations_for;
use wuxing_qingyang::{
    calculate_constitution, generate_recommendations, ElementKind, FiveElementsDistribution,
    WuxingError, CANONICAL_ORDER,
};

fn scores(dist: &FiveElementsDistribution) -> Vec<(ElementKind, i32)> {
    dist.iter().collect()
}

/// 2000-01-01 00:30：年金、月土、日火、時木
#[test]
fn test_fixed_input_matches_hand_computed_table() {
    let result = calculate_constitution("2000-01-01", "00:30", "北京").unwrap();

    assert_eq!(
        scores(&result.distribution),
        vec![
            (ElementKind::Wood, 30),  // 20 + 15(時), 金剋木 -5
            (ElementKind::Fire, 40),  // 20 + 20(日), 木生火 +5 = 45 -> 40
            (ElementKind::Earth, 35), // 20 + 15(月), 火生土 +5, 木剋土 -5
            (ElementKind::Metal, 30), // 20 + 10(年), 土生金 +5, 火剋金 -5
            (ElementKind::Water, 20), // 20, 金生水 +5, 土剋水 -5
        ]
    );
    assert_eq!(result.conclusion.element_condition, "水偏弱");
    assert_eq!(result.strengths, vec!["火偏强→心气盛".to_string()]);
}

/// 2008-01-02 09:00 四柱皆土
#[test]
fn test_four_earth_pillars() {
    let result = calculate_constitution("2008-01-02", "09:00", "").unwrap();
    let dist = result.distribution;

    // 20 + 10 + 15 + 20 + 15 = 80 -> 40
    assert_eq!(dist.get(ElementKind::Earth), 40);
    // 四個土柱各生金 +5
    assert_eq!(dist.get(ElementKind::Metal), 40);
    // 四個土柱各剋水 -5，0 -> 5
    assert_eq!(dist.get(ElementKind::Water), 5);
    assert_eq!(dist.get(ElementKind::Wood), 20);
    assert_eq!(dist.get(ElementKind::Fire), 20);

    // 土與金同分，土在前
    assert_eq!(result.strengths[0], "土偏强→脾气盛");
    assert_eq!(result.conclusion.organ_condition, "肾气虚");
}

#[test]
fn test_tied_minimum_selects_wood() {
    let dist = FiveElementsDistribution::new(10, 10, 30, 15, 20);
    let result = wuxing_qingyang::core::analyzer::ConstitutionAnalyzer::new().analyze(dist);

    assert_eq!(result.conclusion.element_condition, "木偏弱");
    assert_eq!(result.conclusion.organ_condition, "肝气虚");
    assert!(result.conclusion.symptoms.contains("易怒"));
    assert_eq!(generate_recommendations(&result), recommendations_for(ElementKind::Wood));
}

#[test]
fn test_invalid_time_is_rejected() {
    let err = calculate_constitution("2000-01-01", "25:99", "北京").unwrap_err();
    assert!(matches!(err, WuxingError::InvalidInput { ref field, .. } if field == "birth_time"));

    let err = calculate_constitution("not-a-date", "12:00", "北京").unwrap_err();
    assert!(matches!(err, WuxingError::InvalidInput { ref field, .. } if field == "birth_date"));
}

#[test]
fn test_boundary_inputs_are_not_errors() {
    for (date, time) in [
        ("2000-02-29", "00:00"),
        ("1999-12-31", "23:59"),
        ("1850-06-15", "12:00"),
        ("2100-01-01", "01:01"),
    ] {
        assert!(
            calculate_constitution(date, time, "").is_ok(),
            "{} {} should be accepted",
            date,
            time
        );
    }
}

fn sweep() -> impl Iterator<Item = (String, String)> {
    (1850..=2100).step_by(7).flat_map(|year| {
        (1..=12).flat_map(move |month| {
            (1..=28).step_by(3).flat_map(move |day| {
                (0..24).map(move |hour| {
                    (
                        format!("{:04}-{:02}-{:02}", year, month, day),
                        format!("{:02}:{:02}", hour, (hour * 7) % 60),
                    )
                })
            })
        })
    })
}

#[test]
fn test_results_are_deterministic_and_in_range() {
    for (date, time) in sweep() {
        let first = calculate_constitution(&date, &time, "上海").unwrap();
        let second = calculate_constitution(&date, &time, "上海").unwrap();
        assert_eq!(first, second, "{} {}", date, time);

        for (kind, score) in first.distribution.iter() {
            assert!((5..=40).contains(&score), "{} {} {}={}", date, time, kind, score);
        }
    }
}

#[test]
fn test_weakest_element_is_consistent_everywhere() {
    for (date, time) in sweep() {
        let result = calculate_constitution(&date, &time, "").unwrap();
        let dist = result.distribution;

        let min_score = dist.iter().map(|(_, s)| s).min().unwrap();
        let expected = CANONICAL_ORDER
            .iter()
            .copied()
            .find(|kind| dist.get(*kind) == min_score)
            .unwrap();

        assert_eq!(dist.weakest(), expected);
        assert_eq!(
            result.conclusion.element_condition,
            format!("{}偏弱", expected.chinese_name())
        );
        assert_eq!(result.weaknesses, vec![result.conclusion.to_string()]);
        assert_eq!(generate_recommendations(&result), recommendations_for(expected));
    }
}

#[test]
fn test_recommendations_never_empty() {
    for kind in CANONICAL_ORDER {
        let recs = recommendations_for(kind);
        assert!(!recs.diet.is_empty());
        assert!(!recs.sleep.is_empty());
        assert!(!recs.exercise.is_empty());
    }
}
