use crate::domain::model::ElementKind::{Earth, Fire, Metal, Water, Wood};
use crate::domain::model::{ElementKind, FiveElementsDistribution, CANONICAL_ORDER};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

const BASE_SCORE: i32 = 20;
const YEAR_WEIGHT: i32 = 10;
const MONTH_WEIGHT: i32 = 15;
const DAY_WEIGHT: i32 = 20;
const HOUR_WEIGHT: i32 = 15;
const RELATION_STEP: i32 = 5;

// 天干十年一輪，相鄰兩年同屬一行
const YEAR_TABLE: [ElementKind; 10] = [
    Metal, Metal, Water, Water, Wood, Wood, Fire, Fire, Earth, Earth,
];
const MONTH_TABLE: [ElementKind; 12] = [
    Earth, Wood, Wood, Fire, Fire, Earth, Earth, Metal, Metal, Water, Water, Earth,
];
// 十二時辰，每個時辰兩小時
const HOUR_TABLE: [ElementKind; 12] = [
    Wood, Wood, Fire, Fire, Earth, Earth, Metal, Metal, Water, Water, Wood, Wood,
];

/// 年、月、日、時四柱各自對應的五行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillars {
    pub year: ElementKind,
    pub month: ElementKind,
    pub day: ElementKind,
    pub hour: ElementKind,
}

impl Pillars {
    pub fn resolve(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            year: year_element(date.year()),
            month: month_element(date.month()),
            day: day_element(date.year(), date.month(), date.day()),
            hour: hour_element(time.hour()),
        }
    }

    pub fn as_array(&self) -> [ElementKind; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

pub fn year_element(year: i32) -> ElementKind {
    let index = (year - 1900).rem_euclid(10) as usize;
    YEAR_TABLE[index]
}

/// `month` 為 1..=12
pub fn month_element(month: u32) -> ElementKind {
    MONTH_TABLE[(month as usize + 11) % 12]
}

/// 簡化的日柱推算，並非真正的干支紀日
pub fn day_element(year: i32, month: u32, day: u32) -> ElementKind {
    let total_days = (year as i64 - 2000) * 365 + month as i64 * 30 + day as i64;
    CANONICAL_ORDER[total_days.rem_euclid(5) as usize]
}

pub fn hour_element(hour: u32) -> ElementKind {
    HOUR_TABLE[(hour as usize / 2) % 12]
}

/// 由出生日期與時間推算五行分布
#[derive(Debug, Default, Clone, Copy)]
pub struct ElementDeriver;

impl ElementDeriver {
    pub fn new() -> Self {
        Self
    }

    pub fn derive(&self, date: NaiveDate, time: NaiveTime) -> FiveElementsDistribution {
        let pillars = Pillars::resolve(date, time);
        tracing::debug!(
            "Pillars for {} {}: year={}, month={}, day={}, hour={}",
            date,
            time.format("%H:%M"),
            pillars.year,
            pillars.month,
            pillars.day,
            pillars.hour
        );
        self.score(&pillars)
    }

    pub fn score(&self, pillars: &Pillars) -> FiveElementsDistribution {
        FiveElementsDistribution::from_fn(|target| score_element(pillars, target))
    }
}

/// 未夾限的原始分數
pub fn score_element(pillars: &Pillars, target: ElementKind) -> i32 {
    let mut value = BASE_SCORE;

    if pillars.year == target {
        value += YEAR_WEIGHT;
    }
    if pillars.month == target {
        value += MONTH_WEIGHT;
    }
    if pillars.day == target {
        value += DAY_WEIGHT;
    }
    if pillars.hour == target {
        value += HOUR_WEIGHT;
    }

    for element in pillars.as_array() {
        if element.generates() == target {
            value += RELATION_STEP;
        }
        if element.overcomes() == target {
            value -= RELATION_STEP;
        }
    }

    value
}
