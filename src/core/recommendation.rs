use crate::domain::model::{ConstitutionResult, ElementKind, RecommendationSet};

#[derive(Debug, Default, Clone, Copy)]
pub struct RecommendationMapper;

impl RecommendationMapper {
    pub fn new() -> Self {
        Self
    }

    /// 依分布中最弱的元素挑選調理建議
    pub fn generate(&self, result: &ConstitutionResult) -> RecommendationSet {
        let weakest = result.distribution.weakest();
        tracing::debug!("Selecting recommendations for weakest element: {}", weakest);
        recommendations_for(weakest)
    }
}

pub fn recommendations_for(kind: ElementKind) -> RecommendationSet {
    match kind {
        ElementKind::Wood => set(
            &["多吃绿色食物如菠菜、芹菜", "适量食用酸味食物如乌梅、山楂", "避免过多食用甜食"],
            &["保证充足睡眠，23点前入睡", "睡前放松心情，避免情绪激动", "可尝试冥想或深呼吸练习"],
            &["适合散步、太极拳等温和运动", "避免剧烈运动和过度疲劳", "每天保持适量户外活动"],
        ),
        ElementKind::Fire => set(
            &["多吃红色食物如红豆、红枣", "适量食用苦味食物如苦瓜、莲子", "减少辛辣刺激性食物"],
            &["保证规律作息，避免熬夜", "睡前避免情绪兴奋", "可尝试温水泡脚"],
            &["适合游泳、瑜伽等清凉运动", "避免高温环境下运动", "运动后及时补充水分"],
        ),
        ElementKind::Earth => set(
            &["多吃黄色食物如南瓜、小米", "适量食用甜味食物如蜂蜜、山药", "避免生冷油腻食物"],
            &["保持规律作息，午间可小憩", "睡前避免进食过多", "保证睡眠环境安静舒适"],
            &["适合慢跑、快走等中等强度运动", "避免久坐不动", "饭后适当散步"],
        ),
        ElementKind::Metal => set(
            &["多吃白色食物如梨、白萝卜", "适量食用辛味食物如生姜、葱", "避免过咸食物"],
            &["保证充足睡眠，注意保暖", "睡前避免过度思考", "保持卧室空气流通"],
            &["适合有氧运动如快走、慢跑", "避免过度劳累", "注意呼吸道防护"],
        ),
        ElementKind::Water => set(
            &[
                "多吃黑色食物，如黑豆、黑芝麻、黑木耳",
                "适量食用核桃、板栗等坚果",
                "减少生冷食物摄入",
            ],
            &[
                "保证23点前入睡，有利于肾脏修复",
                "睡前避免剧烈运动和使用电子产品",
                "可尝试睡前泡脚10-15分钟",
            ],
            &["适合温和的运动，如太极拳、八段锦", "避免过度出汗的剧烈运动", "每天坚持散步30分钟"],
        ),
    }
}

fn set(diet: &[&str], sleep: &[&str], exercise: &[&str]) -> RecommendationSet {
    RecommendationSet {
        diet: owned(diet),
        sleep: owned(sleep),
        exercise: owned(exercise),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RecommendationSet {
    /// 水的建議作為預設
    fn default() -> Self {
        recommendations_for(ElementKind::Water)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::ConstitutionAnalyzer;
    use crate::domain::model::{FiveElementsDistribution, CANONICAL_ORDER};

    #[test]
    fn test_every_element_has_complete_recommendations() {
        for kind in CANONICAL_ORDER {
            let recs = recommendations_for(kind);
            assert!(!recs.diet.is_empty(), "{} diet empty", kind);
            assert!(!recs.sleep.is_empty(), "{} sleep empty", kind);
            assert!(!recs.exercise.is_empty(), "{} exercise empty", kind);
        }
    }

    #[test]
    fn test_recommendation_sets_are_distinct() {
        for a in CANONICAL_ORDER {
            for b in CANONICAL_ORDER {
                if a != b {
                    assert_ne!(recommendations_for(a), recommendations_for(b));
                }
            }
        }
    }

    #[test]
    fn test_generate_follows_weakest_with_tie_break() {
        let result =
            ConstitutionAnalyzer::new().analyze(FiveElementsDistribution::new(10, 10, 30, 15, 20));
        let recs = RecommendationMapper::new().generate(&result);
        assert_eq!(recs, recommendations_for(ElementKind::Wood));
        assert_eq!(recs.diet[0], "多吃绿色食物如菠菜、芹菜");
    }

    #[test]
    fn test_default_is_water() {
        assert_eq!(RecommendationSet::default(), recommendations_for(ElementKind::Water));
    }
}
