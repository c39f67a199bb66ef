use serde::Serialize;

/// The four kinds of monthly usage that contribute to a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Electricity, // kWh
    Fuel,        // liters
    Travel,      // km
    Waste,       // kg
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electricity,
        Category::Fuel,
        Category::Travel,
        Category::Waste,
    ];

    /// kg CO₂ emitted per unit of usage.
    pub fn factor(&self) -> f64 {
        match self {
            Category::Electricity => 0.5,
            Category::Fuel => 2.3,
            Category::Travel => 0.2,
            Category::Waste => 0.5,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Category::Electricity => "kWh",
            Category::Fuel => "L",
            Category::Travel => "km",
            Category::Waste => "kg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Fuel => "Fuel",
            Category::Travel => "Travel",
            Category::Waste => "Waste",
        }
    }

    /// Name used for CLI flags and error messages.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::Fuel => "fuel",
            Category::Travel => "travel",
            Category::Waste => "waste",
        }
    }
}
