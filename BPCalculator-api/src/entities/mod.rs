// Public entities for the BP Calculator API
// This module contains data structures that are shared across the application boundary

// Data structures for blood pressure calculation
pub mod blood_pressure;

// Common entities for error handling
pub mod common;
