use crate::models::category::Category;

/// One usage figure as the user entered it.
///
/// The raw text is kept so that the estimate and the stored value can apply
/// different rules: the estimate counts anything unusable as 0, while storage
/// keeps it absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageField {
    raw: Option<String>,
}

impl UsageField {
    pub fn absent() -> Self {
        Self { raw: None }
    }

    pub fn from_raw<S: Into<String>>(raw: Option<S>) -> Self {
        Self {
            raw: raw.map(Into::into),
        }
    }

    pub fn from_value(v: f64) -> Self {
        Self {
            raw: Some(v.to_string()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Parsed value, `None` when missing, blank, unparseable or not finite.
    pub fn parsed(&self) -> Option<f64> {
        self.raw
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    pub fn value_for_estimate(&self) -> f64 {
        self.parsed().unwrap_or(0.0)
    }

    /// Value written to the store. Zero is stored as absent, like any
    /// figure the user left out.
    pub fn value_for_storage(&self) -> Option<f64> {
        self.parsed().filter(|v| *v != 0.0)
    }
}

/// Monthly usage figures for a single submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageInput {
    pub electricity_kwh: UsageField,
    pub fuel_liters: UsageField,
    pub travel_km: UsageField,
    pub waste_kg: UsageField,
}

impl UsageInput {
    pub fn new(
        electricity_kwh: UsageField,
        fuel_liters: UsageField,
        travel_km: UsageField,
        waste_kg: UsageField,
    ) -> Self {
        Self {
            electricity_kwh,
            fuel_liters,
            travel_km,
            waste_kg,
        }
    }

    /// Convenience constructor from already-numeric figures.
    pub fn from_values(e: f64, f: f64, t: f64, w: f64) -> Self {
        Self::new(
            UsageField::from_value(e),
            UsageField::from_value(f),
            UsageField::from_value(t),
            UsageField::from_value(w),
        )
    }

    pub fn field(&self, category: Category) -> &UsageField {
        match category {
            Category::Electricity => &self.electricity_kwh,
            Category::Fuel => &self.fuel_liters,
            Category::Travel => &self.travel_km,
            Category::Waste => &self.waste_kg,
        }
    }

    /// Fields that parsed to a negative number.
    pub fn negative_fields(&self) -> Vec<(Category, &str)> {
        Category::ALL
            .iter()
            .filter_map(|c| {
                let f = self.field(*c);
                match (f.parsed(), f.raw()) {
                    (Some(v), Some(raw)) if v < 0.0 => Some((*c, raw)),
                    _ => None,
                }
            })
            .collect()
    }
}
