use crate::models::category::Category;
use crate::models::usage::UsageInput;

/// Emissions for one category of usage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub usage: f64,
    pub carbon_kg: f64,
}

/// Per-category products plus their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub shares: Vec<CategoryShare>,
    pub total_kg: f64,
}

const TIPS: [&str; 4] = [
    "Use energy-efficient appliances",
    "Consider public transport",
    "Reduce, reuse, and recycle waste",
    "Switch to renewable energy",
];

/// Monthly footprint in kg CO₂: electricity × 0.5 + fuel × 2.3 +
/// travel × 0.2 + waste × 0.5. Unusable figures count as 0.
pub fn estimate(input: &UsageInput) -> f64 {
    breakdown(input).total_kg
}

pub fn breakdown(input: &UsageInput) -> Breakdown {
    let shares: Vec<CategoryShare> = Category::ALL
        .iter()
        .map(|c| {
            let usage = input.field(*c).value_for_estimate();
            CategoryShare {
                category: *c,
                usage,
                carbon_kg: usage * c.factor(),
            }
        })
        .collect();

    let total_kg = shares.iter().map(|s| s.carbon_kg).sum();

    Breakdown { shares, total_kg }
}

/// Suggestions shown next to a non-zero result.
pub fn reduction_tips(total_kg: f64) -> &'static [&'static str] {
    if total_kg > 0.0 { &TIPS } else { &[] }
}
