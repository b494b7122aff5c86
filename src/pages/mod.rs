//! Pages
//!
//! Top-level page components for each route.

pub mod my_electric;

pub use my_electric::MyElectric;
