//! Authored card content.
//!
//! Major arcana are written out card by card. Minor arcana are generated
//! from the per-rank and per-court keyword tables below.

/// Authored record for one major-arcana card.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MajorEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub localized_name: &'static str,
    pub keywords: &'static [&'static str],
    pub upright: &'static str,
    pub reversed: &'static str,
    pub element: &'static str,
    pub astrology: &'static str,
}

/// The 22 major arcana, indexed by card number.
pub(crate) const MAJOR_ARCANA: [MajorEntry; 22] = [
    MajorEntry {
        slug: "fool",
        name: "The Fool",
        localized_name: "愚者",
        keywords: &["開始", "冒險", "純真", "信任"],
        upright: "新的開始、冒險精神、保持開放的心態、勇於嘗試未知",
        reversed: "魯莽行事、缺乏計劃、逃避責任、過度天真",
        element: "風",
        astrology: "天王星",
    },
    MajorEntry {
        slug: "magician",
        name: "The Magician",
        localized_name: "魔術師",
        keywords: &["顯化", "技能", "力量", "專注"],
        upright: "擁有實現目標的能力和資源、創造力、溝通技巧、自信",
        reversed: "操縱、欺騙、缺乏方向、未善用天賦",
        element: "風",
        astrology: "水星",
    },
    MajorEntry {
        slug: "priestess",
        name: "The High Priestess",
        localized_name: "女祭司",
        keywords: &["直覺", "神秘", "潛意識", "智慧"],
        upright: "傾聽內在聲音、神秘知識、靈性覺醒、等待時機",
        reversed: "忽視直覺、秘密、表面知識、與內在脫節",
        element: "水",
        astrology: "月亮",
    },
    MajorEntry {
        slug: "empress",
        name: "The Empress",
        localized_name: "皇后",
        keywords: &["豐盛", "孕育", "自然", "母性"],
        upright: "創造力、豐盛、養育、與自然連結、美好事物",
        reversed: "過度依賴他人、創意受阻、忽視自我照顧",
        element: "土",
        astrology: "金星",
    },
    MajorEntry {
        slug: "emperor",
        name: "The Emperor",
        localized_name: "皇帝",
        keywords: &["權威", "結構", "掌控", "穩定"],
        upright: "建立秩序、領導力、穩定結構、父親形象、責任",
        reversed: "專制、僵化、失去控制、缺乏紀律",
        element: "火",
        astrology: "白羊座",
    },
    MajorEntry {
        slug: "hierophant",
        name: "The Hierophant",
        localized_name: "教皇",
        keywords: &["傳統", "教導", "信仰", "傳承"],
        upright: "傳統價值、精神導師、教育、遵循規範、尋求指引",
        reversed: "挑戰傳統、獨立思考、脫離體制、創新",
        element: "土",
        astrology: "金牛座",
    },
    MajorEntry {
        slug: "lovers",
        name: "The Lovers",
        localized_name: "戀人",
        keywords: &["愛", "選擇", "和諧", "結合"],
        upright: "愛情、重要選擇、價值觀一致、和諧關係",
        reversed: "不和諧、選擇困難、價值衝突、失衡",
        element: "風",
        astrology: "雙子座",
    },
    MajorEntry {
        slug: "chariot",
        name: "The Chariot",
        localized_name: "戰車",
        keywords: &["意志", "決心", "勝利", "掌控"],
        upright: "克服障礙、意志力、前進、自律、達成目標",
        reversed: "失去方向、缺乏控制、受阻、自我懷疑",
        element: "水",
        astrology: "巨蟹座",
    },
    MajorEntry {
        slug: "strength",
        name: "Strength",
        localized_name: "力量",
        keywords: &["勇氣", "耐心", "溫柔", "內在力量"],
        upright: "溫柔的力量、勇氣、耐心、克服恐懼、自我控制",
        reversed: "自我懷疑、缺乏信心、失去控制、脆弱",
        element: "火",
        astrology: "獅子座",
    },
    MajorEntry {
        slug: "hermit",
        name: "The Hermit",
        localized_name: "隱者",
        keywords: &["內省", "智慧", "孤獨", "指引"],
        upright: "內在探索、尋找答案、獨處、靈性成長、智慧",
        reversed: "孤立、拒絕幫助、迷失、逃避現實",
        element: "土",
        astrology: "處女座",
    },
    MajorEntry {
        slug: "fortune",
        name: "Wheel of Fortune",
        localized_name: "命運之輪",
        keywords: &["命運", "循環", "轉折", "機會"],
        upright: "好運、轉機、生命週期、順應變化、業力",
        reversed: "厄運、抗拒改變、失控、外部力量",
        element: "火",
        astrology: "木星",
    },
    MajorEntry {
        slug: "justice",
        name: "Justice",
        localized_name: "正義",
        keywords: &["公平", "真相", "法律", "因果"],
        upright: "公正、真相、法律事務、因果報應、做正確的事",
        reversed: "不公、偏見、逃避責任、失衡",
        element: "風",
        astrology: "天秤座",
    },
    MajorEntry {
        slug: "hanged",
        name: "The Hanged Man",
        localized_name: "倒吊者",
        keywords: &["犧牲", "放手", "新視角", "等待"],
        upright: "換個角度、暫停、犧牲、放下執著、等待時機",
        reversed: "無謂犧牲、拖延、抗拒、錯失機會",
        element: "水",
        astrology: "海王星",
    },
    MajorEntry {
        slug: "death",
        name: "Death",
        localized_name: "死神",
        keywords: &["轉變", "結束", "重生", "放下"],
        upright: "結束與開始、轉變、放下過去、新生、必要的改變",
        reversed: "抗拒改變、停滯、無法放手、恐懼",
        element: "水",
        astrology: "天蠍座",
    },
    MajorEntry {
        slug: "temperance",
        name: "Temperance",
        localized_name: "節制",
        keywords: &["平衡", "和諧", "耐心", "調和"],
        upright: "平衡、調和、耐心、適度、整合",
        reversed: "失衡、過度、缺乏和諧、不耐煩",
        element: "火",
        astrology: "射手座",
    },
    MajorEntry {
        slug: "devil",
        name: "The Devil",
        localized_name: "惡魔",
        keywords: &["束縛", "誘惑", "物質", "陰影"],
        upright: "束縛、上癮、物質慾望、陰影面、受困",
        reversed: "解脫、覺察、打破枷鎖、面對陰影",
        element: "土",
        astrology: "摩羯座",
    },
    MajorEntry {
        slug: "tower",
        name: "The Tower",
        localized_name: "塔",
        keywords: &["突變", "崩潰", "啟示", "重建"],
        upright: "突然改變、破壞舊有、啟示、必要的崩潰",
        reversed: "避免災難、逐漸改變、恐懼變化",
        element: "火",
        astrology: "火星",
    },
    MajorEntry {
        slug: "star",
        name: "The Star",
        localized_name: "星星",
        keywords: &["希望", "療癒", "啟發", "信念"],
        upright: "希望、療癒、靈感、信念、平靜",
        reversed: "失去信心、絕望、缺乏靈感",
        element: "風",
        astrology: "水瓶座",
    },
    MajorEntry {
        slug: "moon",
        name: "The Moon",
        localized_name: "月亮",
        keywords: &["幻覺", "潛意識", "恐懼", "直覺"],
        upright: "潛意識、幻覺、恐懼、直覺、夢境",
        reversed: "走出迷霧、釋放恐懼、清晰",
        element: "水",
        astrology: "雙魚座",
    },
    MajorEntry {
        slug: "sun",
        name: "The Sun",
        localized_name: "太陽",
        keywords: &["成功", "喜悅", "活力", "真實"],
        upright: "成功、喜悅、活力、樂觀、真實自我",
        reversed: "過度樂觀、延遲成功、缺乏熱情",
        element: "火",
        astrology: "太陽",
    },
    MajorEntry {
        slug: "judgement",
        name: "Judgement",
        localized_name: "審判",
        keywords: &["重生", "覺醒", "呼喚", "評判"],
        upright: "重生、覺醒、聽從呼喚、最終判斷、寬恕",
        reversed: "自我懷疑、拖延、忽視呼喚",
        element: "火",
        astrology: "冥王星",
    },
    MajorEntry {
        slug: "world",
        name: "The World",
        localized_name: "世界",
        keywords: &["完成", "成就", "圓滿", "整合"],
        upright: "完成、成就、圓滿、整合、世界舞台",
        reversed: "未完成、缺乏閉合、延遲、短視",
        element: "土",
        astrology: "土星",
    },
];

/// Keywords shared by every ace.
pub(crate) const ACE_KEYWORDS: &[&str] = &["開始", "潛力", "機會"];

/// Keyword list used when a rank has no authored entry.
pub(crate) const PLACEHOLDER_KEYWORDS: &[&str] = &["待補充"];

/// Keywords for a pip card by face value.
pub(crate) fn pip_keywords(number: u8) -> &'static [&'static str] {
    match number {
        2 => &["平衡", "選擇", "夥伴"],
        3 => &["創造", "成長", "合作"],
        4 => &["穩定", "結構", "休息"],
        5 => &["衝突", "挑戰", "改變"],
        6 => &["和諧", "平衡", "進展"],
        7 => &["評估", "選擇", "幻覺"],
        8 => &["行動", "快速", "限制"],
        9 => &["接近完成", "智慧", "困擾"],
        10 => &["完成", "結束", "重擔"],
        _ => PLACEHOLDER_KEYWORDS,
    }
}

/// Keywords for a court card. `None` for non-court ranks.
pub(crate) fn court_keywords(rank: super::Rank) -> Option<&'static [&'static str]> {
    use super::Rank;

    let keywords: &'static [&'static str] = match rank {
        Rank::Page => &["學習", "訊息", "好奇"],
        Rank::Knight => &["行動", "追求", "冒險"],
        Rank::Queen => &["內在", "滋養", "直覺"],
        Rank::King => &["掌控", "權威", "成熟"],
        _ => return None,
    };
    Some(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_major_table_complete() {
        assert_eq!(MAJOR_ARCANA.len(), 22);
        for entry in &MAJOR_ARCANA {
            assert!(!entry.slug.is_empty());
            assert!(entry.keywords.len() >= 3, "{} has too few keywords", entry.slug);
            assert!(!entry.upright.is_empty());
            assert!(!entry.reversed.is_empty());
        }
    }

    #[test]
    fn test_major_slugs_unique() {
        let mut slugs: Vec<_> = MAJOR_ARCANA.iter().map(|e| e.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 22);
    }

    #[test]
    fn test_pip_keywords() {
        assert_eq!(pip_keywords(2), &["平衡", "選擇", "夥伴"]);
        assert_eq!(pip_keywords(10)[0], "完成");
        assert_eq!(pip_keywords(1), PLACEHOLDER_KEYWORDS);
        assert_eq!(pip_keywords(11), PLACEHOLDER_KEYWORDS);
    }

    #[test]
    fn test_court_keywords_total() {
        for rank in Rank::COURTS {
            assert_eq!(court_keywords(rank).map(<[_]>::len), Some(3));
        }
        assert_eq!(court_keywords(Rank::Ace), None);
    }
}
