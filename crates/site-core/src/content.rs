use crate::carousel::CardContent;
use crate::counter::CountUp;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "World-Class Representation",
        "Representing renowned companies in Banknote & Security Printing, Mint Industry, Security Paper Mills, and Smart Card Industry across India.",
        "🌍",
    ),
    (
        "High-Value Tender Expertise",
        "Specialized in handling complex, high-value tenders with established credentials and proven track record since 1992.",
        "📋",
    ),
    (
        "Complete Supply Solutions",
        "Comprehensive supplier of machineries, raw materials, spares, and consumables for security printing and smart card industries.",
        "⚙️",
    ),
    (
        "Strategic Location",
        "Office located in Mumbai's business district with excellent connectivity to international airports and major highways.",
        "📍",
    ),
    (
        "Dedicated Warehouse Facility",
        "Modern warehouse for stocking spares, consumables, and raw materials ensuring quick delivery and reliable supply chain.",
        "🏭",
    ),
    (
        "Expert After-Sales Support",
        "Team of 15+ professionals including skilled service engineers providing comprehensive after-sales support and maintenance.",
        "🛠️",
    ),
];

/// Trust-bar clients as (name, abbreviation).
pub const CLIENTS: [(&str, &str); 8] = [
    ("Reserve Bank of India", "RBI"),
    ("European Central Bank", "ECB"),
    ("Bank of England", "BoE"),
    ("Federal Reserve", "FED"),
    ("Swiss National Bank", "SNB"),
    ("Bank of Japan", "BoJ"),
    ("People's Bank of China", "PBOC"),
    ("Deutsche Bundesbank", "DBB"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: 30,
        suffix: "+",
        label: "Years of Leadership",
    },
    Stat {
        value: 25,
        suffix: "+",
        label: "Global Partners",
    },
    Stat {
        value: 15,
        suffix: "+",
        label: "Government Institutions",
    },
    Stat {
        value: 150,
        suffix: "+",
        label: "Countries Served",
    },
];

pub fn feature_cards() -> Vec<CardContent> {
    FEATURES
        .iter()
        .map(|(title, description, icon)| CardContent::new(title, description, icon))
        .collect()
}

pub fn stat_counters() -> Vec<CountUp> {
    STATS.iter().map(|s| CountUp::new(s.value, s.suffix)).collect()
}
