/// 查詢表單提供的出生地區
pub const KNOWN_REGIONS: [&str; 40] = [
    "北京", "上海", "广州", "深圳", "杭州", "南京", "成都", "重庆", "武汉", "西安", "沈阳", "大连",
    "天津", "青岛", "济南", "哈尔滨", "长春", "石家庄", "郑州", "长沙", "福州", "厦门", "南宁",
    "昆明", "贵阳", "兰州", "太原", "合肥", "南昌", "苏州", "无锡", "宁波", "温州", "佛山", "东莞",
    "珠海", "中山", "惠州", "汕头", "湛江",
];

pub fn is_known_region(region: &str) -> bool {
    let region = region.trim();
    KNOWN_REGIONS.iter().any(|known| *known == region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions() {
        assert!(is_known_region("北京"));
        assert!(is_known_region(" 湛江 "));
        assert!(!is_known_region("Paris"));
        assert!(!is_known_region(""));
    }
}
