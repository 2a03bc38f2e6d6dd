pub mod blood_pressure;
pub mod health;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use blood_pressure::{
    calculate_category, get_category_explanation, get_form_defaults, list_categories,
};
pub use health::health_check;
