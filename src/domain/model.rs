use serde::{Deserialize, Serialize};
use std::fmt;

/// 五行元素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// 五行的標準順序，所有排名的平手判定都以此為準
pub const CANONICAL_ORDER: [ElementKind; 5] = [
    ElementKind::Wood,
    ElementKind::Fire,
    ElementKind::Earth,
    ElementKind::Metal,
    ElementKind::Water,
];

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Wood => "wood",
            ElementKind::Fire => "fire",
            ElementKind::Earth => "earth",
            ElementKind::Metal => "metal",
            ElementKind::Water => "water",
        }
    }

    pub fn chinese_name(self) -> &'static str {
        match self {
            ElementKind::Wood => "木",
            ElementKind::Fire => "火",
            ElementKind::Earth => "土",
            ElementKind::Metal => "金",
            ElementKind::Water => "水",
        }
    }

    /// 對應臟腑
    pub fn organ(self) -> &'static str {
        match self {
            ElementKind::Wood => "肝",
            ElementKind::Fire => "心",
            ElementKind::Earth => "脾",
            ElementKind::Metal => "肺",
            ElementKind::Water => "肾",
        }
    }

    /// 該元素偏弱時的典型表現
    pub fn characteristics(self) -> &'static str {
        match self {
            ElementKind::Wood => "易怒、情绪波动大、眼睛易疲劳",
            ElementKind::Fire => "易失眠、心悸、口舌生疮",
            ElementKind::Earth => "消化不良、腹胀、疲劳乏力",
            ElementKind::Metal => "易感冒、皮肤干燥、咳嗽",
            ElementKind::Water => "腰酸、记性差、头发早白",
        }
    }

    /// 相生：木生火、火生土、土生金、金生水、水生木
    pub fn generates(self) -> ElementKind {
        match self {
            ElementKind::Wood => ElementKind::Fire,
            ElementKind::Fire => ElementKind::Earth,
            ElementKind::Earth => ElementKind::Metal,
            ElementKind::Metal => ElementKind::Water,
            ElementKind::Water => ElementKind::Wood,
        }
    }

    /// 相剋：木剋土、火剋金、土剋水、金剋木、水剋火
    pub fn overcomes(self) -> ElementKind {
        match self {
            ElementKind::Wood => ElementKind::Earth,
            ElementKind::Fire => ElementKind::Metal,
            ElementKind::Earth => ElementKind::Water,
            ElementKind::Metal => ElementKind::Wood,
            ElementKind::Water => ElementKind::Fire,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const MIN_SCORE: i32 = 5;
pub const MAX_SCORE: i32 = 40;

/// 五行分數分布，每項分數都落在 [MIN_SCORE, MAX_SCORE]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FiveElementsDistribution {
    wood: i32,
    fire: i32,
    earth: i32,
    metal: i32,
    water: i32,
}

impl FiveElementsDistribution {
    /// 建立分布，超出範圍的分數會被夾到 [5, 40]
    pub fn new(wood: i32, fire: i32, earth: i32, metal: i32, water: i32) -> Self {
        Self {
            wood: clamp_score(wood),
            fire: clamp_score(fire),
            earth: clamp_score(earth),
            metal: clamp_score(metal),
            water: clamp_score(water),
        }
    }

    pub fn from_fn(mut score: impl FnMut(ElementKind) -> i32) -> Self {
        Self::new(
            score(ElementKind::Wood),
            score(ElementKind::Fire),
            score(ElementKind::Earth),
            score(ElementKind::Metal),
            score(ElementKind::Water),
        )
    }

    pub fn get(&self, kind: ElementKind) -> i32 {
        match kind {
            ElementKind::Wood => self.wood,
            ElementKind::Fire => self.fire,
            ElementKind::Earth => self.earth,
            ElementKind::Metal => self.metal,
            ElementKind::Water => self.water,
        }
    }

    /// 依標準順序列出 (元素, 分數)
    pub fn iter(&self) -> impl Iterator<Item = (ElementKind, i32)> + '_ {
        CANONICAL_ORDER.iter().map(move |&kind| (kind, self.get(kind)))
    }

    pub fn total(&self) -> i32 {
        self.iter().map(|(_, score)| score).sum()
    }

    /// 該元素佔總分的百分比
    pub fn share_percent(&self, kind: ElementKind) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(kind) as f64 * 100.0 / total as f64
    }

    /// 由高到低排序；同分時依標準順序。
    ///
    /// 最低分平手時，末位是標準順序中較後者，並非 [`weakest`](Self::weakest) 的結果。
    pub fn ranked(&self) -> [(ElementKind, i32); 5] {
        let mut ranked = CANONICAL_ORDER.map(|kind| (kind, self.get(kind)));
        // sort_by 是穩定排序，同分保留標準順序
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn strongest(&self) -> ElementKind {
        self.ranked()[0].0
    }

    /// 最弱元素；同分時取標準順序中較前者
    pub fn weakest(&self) -> ElementKind {
        let mut weakest = CANONICAL_ORDER[0];
        for kind in CANONICAL_ORDER.iter().skip(1).copied() {
            if self.get(kind) < self.get(weakest) {
                weakest = kind;
            }
        }
        weakest
    }
}

fn clamp_score(score: i32) -> i32 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// 體質結論的三個欄位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstitutionConclusion {
    pub element_condition: String,
    pub organ_condition: String,
    pub symptoms: String,
}

impl fmt::Display for ConstitutionConclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}→{}→{}",
            self.element_condition, self.organ_condition, self.symptoms
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstitutionResult {
    pub distribution: FiveElementsDistribution,
    pub conclusion: ConstitutionConclusion,
    pub strengths: Vec<String>,
    /// 與 conclusion 內容相同，保留為獨立欄位
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub diet: Vec<String>,
    pub sleep: Vec<String>,
    pub exercise: Vec<String>,
}

/// 一次完整查詢的輸出
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub birth_date: String,
    pub birth_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_time_end: Option<String>,
    pub region: String,
    pub result: ConstitutionResult,
    pub recommendations: RecommendationSet,
}
