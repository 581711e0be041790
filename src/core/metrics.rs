//! Derived body metrics: BMI, BMR, daily calorie target, meal plan
//!
//! All formulas take metric inputs (kilograms, centimeters); imperial values
//! are converted at the boundary by the caller. Everything here is a pure
//! function of its inputs and is recomputed from scratch whenever any of
//! them change - there is no stored state to fall out of sync.

/// Exact conversion constants
pub const CM_PER_INCH: f64 = 2.54;
pub const KG_PER_POUND: f64 = 0.453_592_37;

/// Biological sex, as used by the Mifflin-St Jeor equation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Sex {
    #[default]
    #[strum(serialize = "Female")]
    Female,
    #[strum(serialize = "Male")]
    Male,
}

/// Activity level with the standard TDEE multipliers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ActivityLevel {
    #[strum(serialize = "Sedentary")]
    Sedentary,
    #[strum(to_string = "Lightly active", serialize = "light")]
    Light,
    #[default]
    #[strum(to_string = "Moderately active", serialize = "moderate")]
    Moderate,
    #[strum(serialize = "Active")]
    Active,
    #[strum(to_string = "Very active", serialize = "very-active")]
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to estimate total daily energy expenditure.
    pub const fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// WHO BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum BmiCategory {
    #[strum(serialize = "Underweight")]
    Underweight,
    #[strum(serialize = "Normal weight")]
    Normal,
    #[strum(serialize = "Overweight")]
    Overweight,
    #[strum(serialize = "Obese")]
    Obese,
}

impl BmiCategory {
    /// Classifies a BMI value against the WHO cutoffs (18.5 / 25 / 30).
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// Body mass index in kg/m², or `None` for non-positive inputs.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Basal metabolic rate via Mifflin-St Jeor, in kcal/day.
pub fn bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Daily calorie target for a given BMR and activity level.
pub fn daily_calories(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// A day's calorie target split across meals (kcal, whole numbers).
///
/// Snacks absorb the rounding remainder so the parts always sum to the
/// target exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealPlan {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
    pub snacks: u32,
}

impl MealPlan {
    /// Splits a daily target 25% / 35% / 30% / 10%.
    pub fn for_calories(daily_calories: f64) -> Self {
        let total = daily_calories.round().max(0.0) as u32;
        let breakfast = (f64::from(total) * 0.25).round() as u32;
        let lunch = (f64::from(total) * 0.35).round() as u32;
        let dinner = (f64::from(total) * 0.30).round() as u32;
        let snacks = total.saturating_sub(breakfast + lunch + dinner);
        Self {
            breakfast,
            lunch,
            dinner,
            snacks,
        }
    }

    /// Total calories across all meals.
    pub const fn total(&self) -> u32 {
        self.breakfast + self.lunch + self.dinner + self.snacks
    }
}

/// Full set of derived metrics for one profile.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyMetrics {
    pub bmi: f64,
    pub category: BmiCategory,
    pub bmr: f64,
    pub daily_calories: f64,
    pub meal_plan: MealPlan,
}

impl BodyMetrics {
    /// Computes every derived metric from validated metric inputs.
    ///
    /// Returns `None` when the inputs cannot produce a meaningful result
    /// (non-positive height or weight).
    pub fn compute(
        sex: Sex,
        activity: ActivityLevel,
        weight_kg: f64,
        height_cm: f64,
        age: u32,
    ) -> Option<Self> {
        let bmi_value = bmi(weight_kg, height_cm)?;
        let bmr_value = bmr(sex, weight_kg, height_cm, age);
        let calories = daily_calories(bmr_value, activity);
        Some(Self {
            bmi: bmi_value,
            category: BmiCategory::from_bmi(bmi_value),
            bmr: bmr_value,
            daily_calories: calories,
            meal_plan: MealPlan::for_calories(calories),
        })
    }
}
