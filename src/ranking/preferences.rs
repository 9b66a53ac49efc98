//! Preference-category heuristics
//!
//! Each rule pairs a category with the keywords that switch it on and a bonus
//! computed from the vehicle's own fields. Rules are independent: a query can
//! trigger several, and their bonuses add up.

use crate::catalog::Vehicle;
use crate::query::ParsedQuery;
use serde::{Deserialize, Serialize};

/// Price at or above which the affordability bonus is zero
pub const AFFORDABLE_PRICE_CEILING: f64 = 50_000.0;
/// Dollars below the ceiling per bonus point
pub const AFFORDABLE_DOLLARS_PER_POINT: f64 = 2_000.0;

pub const PREMIUM_BRAND_BONUS: f64 = 10.0;
/// Dollars per luxury price point
pub const LUXURY_DOLLARS_PER_POINT: f64 = 10_000.0;
pub const LUXURY_PRICE_BONUS_CAP: f64 = 15.0;

pub const FAMILY_BODY_BONUS: f64 = 10.0;
pub const FAMILY_SAFETY_BONUS: f64 = 5.0;
pub const FAMILY_SPACIOUS_BONUS: f64 = 5.0;

pub const EFFICIENT_FUEL_BONUS: f64 = 15.0;
/// Mileage at or above which the low-mileage bonus is zero
pub const EFFICIENT_MILEAGE_CEILING: f64 = 100_000.0;
/// Miles below the ceiling per bonus point
pub const EFFICIENT_MILES_PER_POINT: f64 = 10_000.0;

pub const PERFORMANCE_MODEL_BONUS: f64 = 10.0;
pub const PERFORMANCE_TURBO_BONUS: f64 = 5.0;
pub const PERFORMANCE_ENGINE_BONUS: f64 = 5.0;

const AFFORDABILITY_KEYWORDS: &[&str] = &[
    "cheap",
    "affordable",
    "budget",
    "inexpensive",
    "economical",
    "bargain",
    "deal",
    "value",
    "low-cost",
];

const LUXURY_KEYWORDS: &[&str] = &[
    "luxury",
    "premium",
    "expensive",
    "high-end",
    "upscale",
    "prestige",
    "fancy",
    "exotic",
];

const FAMILY_KEYWORDS: &[&str] = &[
    "family",
    "spacious",
    "safety",
    "safe",
    "kids",
    "children",
    "roomy",
    "room",
    "seating",
];

const EFFICIENCY_KEYWORDS: &[&str] = &[
    "efficient",
    "efficiency",
    "hybrid",
    "electric",
    "eco",
    "green",
    "mpg",
    "fuel",
    "economy",
];

const PERFORMANCE_KEYWORDS: &[&str] = &[
    "fast",
    "powerful",
    "sporty",
    "sport",
    "performance",
    "quick",
    "speed",
    "racing",
    "muscle",
];

const PREMIUM_BRANDS: &[&str] = &[
    "bmw",
    "mercedes-benz",
    "mercedes",
    "audi",
    "lexus",
    "porsche",
    "jaguar",
    "land rover",
    "cadillac",
    "genesis",
    "acura",
    "infiniti",
    "lincoln",
    "volvo",
    "tesla",
    "maserati",
    "bentley",
];

const FAMILY_MODELS: &[&str] = &[
    "suv",
    "minivan",
    "crossover",
    "odyssey",
    "sienna",
    "pacifica",
    "pilot",
    "highlander",
    "cr-v",
    "rav4",
    "explorer",
    "tahoe",
    "suburban",
    "traverse",
    "telluride",
    "palisade",
    "pathfinder",
    "outback",
    "forester",
];

const PERFORMANCE_MODELS: &[&str] = &[
    "nsx",
    "gt-r",
    "gtr",
    "911",
    "corvette",
    "mustang",
    "camaro",
    "challenger",
    "charger",
    "supra",
    "miata",
    "mx-5",
    "wrx",
    "m3",
    "m5",
    "amg",
    "rs",
    "gti",
    "type r",
    "viper",
];

/// Shopper intent inferred from the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceCategory {
    Affordability,
    Luxury,
    Family,
    Efficiency,
    Performance,
}

impl PreferenceCategory {
    pub const ALL: [PreferenceCategory; 5] = [
        Self::Affordability,
        Self::Luxury,
        Self::Family,
        Self::Efficiency,
        Self::Performance,
    ];

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Affordability => "affordability",
            Self::Luxury => "luxury",
            Self::Family => "family",
            Self::Efficiency => "efficiency",
            Self::Performance => "performance",
        }
    }

    /// The rule for this category
    pub fn rule(&self) -> &'static PreferenceRule {
        match self {
            Self::Affordability => &RULES[0],
            Self::Luxury => &RULES[1],
            Self::Family => &RULES[2],
            Self::Efficiency => &RULES[3],
            Self::Performance => &RULES[4],
        }
    }
}

impl std::fmt::Display for PreferenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category gated by a keyword set, scored from vehicle attributes
pub struct PreferenceRule {
    pub category: PreferenceCategory,
    pub keywords: &'static [&'static str],
    bonus: fn(&Vehicle) -> f64,
}

impl PreferenceRule {
    /// Whether any query term is one of this rule's keywords
    pub fn is_triggered(&self, query: &ParsedQuery) -> bool {
        query.has_any_term(self.keywords)
    }

    /// Bonus for a vehicle, ignoring whether the rule is triggered
    pub fn bonus(&self, vehicle: &Vehicle) -> f64 {
        (self.bonus)(vehicle)
    }
}

impl std::fmt::Debug for PreferenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceRule")
            .field("category", &self.category)
            .field("keywords", &self.keywords)
            .finish()
    }
}

/// All rules, in [`PreferenceCategory::ALL`] order
pub static RULES: [PreferenceRule; 5] = [
    PreferenceRule {
        category: PreferenceCategory::Affordability,
        keywords: AFFORDABILITY_KEYWORDS,
        bonus: affordability_bonus,
    },
    PreferenceRule {
        category: PreferenceCategory::Luxury,
        keywords: LUXURY_KEYWORDS,
        bonus: luxury_bonus,
    },
    PreferenceRule {
        category: PreferenceCategory::Family,
        keywords: FAMILY_KEYWORDS,
        bonus: family_bonus,
    },
    PreferenceRule {
        category: PreferenceCategory::Efficiency,
        keywords: EFFICIENCY_KEYWORDS,
        bonus: efficiency_bonus,
    },
    PreferenceRule {
        category: PreferenceCategory::Performance,
        keywords: PERFORMANCE_KEYWORDS,
        bonus: performance_bonus,
    },
];

/// Categories the query asks for
pub fn triggered_categories(query: &ParsedQuery) -> Vec<PreferenceCategory> {
    RULES
        .iter()
        .filter(|r| r.is_triggered(query))
        .map(|r| r.category)
        .collect()
}

/// Sum of bonuses from every triggered rule
pub fn preference_score(query: &ParsedQuery, vehicle: &Vehicle) -> f64 {
    RULES
        .iter()
        .filter(|r| r.is_triggered(query))
        .map(|r| r.bonus(vehicle))
        .sum()
}

fn affordability_bonus(vehicle: &Vehicle) -> f64 {
    (AFFORDABLE_PRICE_CEILING - vehicle.price).max(0.0) / AFFORDABLE_DOLLARS_PER_POINT
}

fn luxury_bonus(vehicle: &Vehicle) -> f64 {
    let make = vehicle.make.to_lowercase();
    let brand = if PREMIUM_BRANDS.contains(&make.as_str()) {
        PREMIUM_BRAND_BONUS
    } else {
        0.0
    };
    let price = (vehicle.price.max(0.0) / LUXURY_DOLLARS_PER_POINT).min(LUXURY_PRICE_BONUS_CAP);
    brand + price
}

fn family_bonus(vehicle: &Vehicle) -> f64 {
    let model = vehicle.model.to_lowercase();
    let description = vehicle.description().to_lowercase();
    let mut bonus = 0.0;

    if FAMILY_MODELS.iter().any(|m| model.contains(m)) {
        bonus += FAMILY_BODY_BONUS;
    }
    if description.contains("safety") {
        bonus += FAMILY_SAFETY_BONUS;
    }
    if description.contains("spacious") {
        bonus += FAMILY_SPACIOUS_BONUS;
    }
    bonus
}

fn efficiency_bonus(vehicle: &Vehicle) -> f64 {
    let fuel = vehicle.fuel_type().to_lowercase();
    let fuel_bonus = if fuel.contains("hybrid") || fuel.contains("electric") {
        EFFICIENT_FUEL_BONUS
    } else {
        0.0
    };
    let mileage = (EFFICIENT_MILEAGE_CEILING - vehicle.mileage as f64).max(0.0)
        / EFFICIENT_MILES_PER_POINT;
    fuel_bonus + mileage
}

fn performance_bonus(vehicle: &Vehicle) -> f64 {
    let model = vehicle.model.to_lowercase();
    let description = vehicle.description().to_lowercase();
    let mut bonus = 0.0;

    if PERFORMANCE_MODELS.iter().any(|m| is_model_word(&model, m)) {
        bonus += PERFORMANCE_MODEL_BONUS;
    }
    if description.contains("turbo") {
        bonus += PERFORMANCE_TURBO_BONUS;
    }
    if description.contains("v8") || description.contains("v6") {
        bonus += PERFORMANCE_ENGINE_BONUS;
    }
    bonus
}

/// `needle` appears in the model on word boundaries ("rs" must not hit "versa")
fn is_model_word(model: &str, needle: &str) -> bool {
    let words: Vec<&str> = model.split_whitespace().collect();
    let needle_words: Vec<&str> = needle.split_whitespace().collect();
    words
        .windows(needle_words.len())
        .any(|w| w == needle_words.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> ParsedQuery {
        ParsedQuery::parse(s)
    }

    #[test]
    fn test_rules_match_categories() {
        for category in PreferenceCategory::ALL {
            assert_eq!(category.rule().category, category);
        }
    }

    #[test]
    fn test_gating() {
        assert_eq!(
            triggered_categories(&q("cheap fast car")),
            vec![PreferenceCategory::Affordability, PreferenceCategory::Performance]
        );
        assert!(triggered_categories(&q("acura nsx")).is_empty());

        let vehicle = Vehicle::new("1", "Honda", "Civic", 2018, 10000.0, 20000);
        assert_eq!(preference_score(&q("acura nsx"), &vehicle), 0.0);
    }

    #[test]
    fn test_affordability_inverse_to_price() {
        let rule = PreferenceCategory::Affordability.rule();
        let cheap = Vehicle::new("1", "Honda", "Fit", 2016, 15000.0, 60000);
        let pricey = Vehicle::new("2", "Honda", "Fit", 2016, 45000.0, 60000);
        let over = Vehicle::new("3", "Honda", "Fit", 2016, 65000.0, 60000);

        assert_eq!(rule.bonus(&cheap), 17.5);
        assert_eq!(rule.bonus(&pricey), 2.5);
        assert_eq!(rule.bonus(&over), 0.0);
    }

    #[test]
    fn test_luxury() {
        let rule = PreferenceCategory::Luxury.rule();
        let bmw = Vehicle::new("1", "BMW", "5 Series", 2020, 50000.0, 20000);
        let kia = Vehicle::new("2", "Kia", "Rio", 2020, 15000.0, 20000);
        let bentley = Vehicle::new("3", "Bentley", "Continental", 2020, 250000.0, 5000);

        assert_eq!(rule.bonus(&bmw), 15.0);
        assert_eq!(rule.bonus(&kia), 1.5);
        assert_eq!(rule.bonus(&bentley), PREMIUM_BRAND_BONUS + LUXURY_PRICE_BONUS_CAP);
    }

    #[test]
    fn test_family_body_beats_coupe() {
        let query = q("family car with room for kids");
        let rule = PreferenceCategory::Family.rule();
        assert!(rule.is_triggered(&query));

        let suv = Vehicle::new("1", "Ford", "Explorer SUV", 2019, 30000.0, 30000);
        let coupe = Vehicle::new("2", "Chevrolet", "Camaro", 2019, 30000.0, 30000)
            .with_description("Two-door coupe");

        assert!(rule.bonus(&suv) > rule.bonus(&coupe));
        assert_eq!(rule.bonus(&coupe), 0.0);
    }

    #[test]
    fn test_family_description_cues() {
        let rule = PreferenceCategory::Family.rule();
        let van = Vehicle::new("1", "Honda", "Odyssey", 2018, 28000.0, 40000)
            .with_description("Spacious cabin, top safety pick");
        assert_eq!(
            rule.bonus(&van),
            FAMILY_BODY_BONUS + FAMILY_SAFETY_BONUS + FAMILY_SPACIOUS_BONUS
        );
    }

    #[test]
    fn test_efficiency() {
        let rule = PreferenceCategory::Efficiency.rule();
        let hybrid = Vehicle::new("1", "Toyota", "Prius", 2020, 22000.0, 20000).with_fuel_type("Hybrid");
        let gas = Vehicle::new("2", "Ford", "F-150", 2015, 22000.0, 150000).with_fuel_type("Gasoline");

        assert_eq!(rule.bonus(&hybrid), EFFICIENT_FUEL_BONUS + 8.0);
        assert_eq!(rule.bonus(&gas), 0.0);
    }

    #[test]
    fn test_performance() {
        let rule = PreferenceCategory::Performance.rule();
        let gt = Vehicle::new("1", "Ford", "Mustang GT", 2018, 32000.0, 20000)
            .with_description("5.0L V8, six-speed manual");
        let wrx = Vehicle::new("2", "Subaru", "WRX", 2019, 27000.0, 25000)
            .with_description("Turbo boxer");
        let versa = Vehicle::new("3", "Nissan", "Versa", 2019, 12000.0, 25000);

        assert_eq!(rule.bonus(&gt), PERFORMANCE_MODEL_BONUS + PERFORMANCE_ENGINE_BONUS);
        assert_eq!(rule.bonus(&wrx), PERFORMANCE_MODEL_BONUS + PERFORMANCE_TURBO_BONUS);
        assert_eq!(rule.bonus(&versa), 0.0);
    }

    #[test]
    fn test_multi_word_performance_model() {
        let rule = PreferenceCategory::Performance.rule();
        let civic = Vehicle::new("1", "Honda", "Civic Type R", 2021, 40000.0, 5000);
        assert_eq!(rule.bonus(&civic), PERFORMANCE_MODEL_BONUS);
    }
}
