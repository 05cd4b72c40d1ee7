//! Base nutrient record
//!
//! Calories and macronutrients per 100 g or 100 ml of a food.

use serde::{Deserialize, Serialize};

/// Nutrient content of a food, normally per 100 units of mass or volume
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseNutrients {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl BaseNutrients {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// All zeros ("no serving selected")
    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiply every field by `multiplier`, without rounding
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    pub fn add(&self, other: &BaseNutrients) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl std::ops::Add for BaseNutrients {
    type Output = BaseNutrients;

    fn add(self, other: BaseNutrients) -> BaseNutrients {
        BaseNutrients::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for BaseNutrients {
    type Output = BaseNutrients;

    fn mul(self, multiplier: f64) -> BaseNutrients {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for BaseNutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BaseNutrients::zero(), |acc, n| acc + n)
    }
}

/// Sum a meal's worth of already-scaled servings
pub fn total_nutrients<'a, I>(items: I) -> BaseNutrients
where
    I: IntoIterator<Item = &'a BaseNutrients>,
{
    items.into_iter().copied().sum()
}
