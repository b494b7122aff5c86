//! State Management
//!
//! App configuration, the reactive view-model and the demo feed driver.

pub mod config;
pub mod demo;
pub mod viewmodel;

pub use config::AppConfig;
pub use demo::start_demo_feed;
pub use viewmodel::{
    provide_view_model, ConfigFlow, ConfigOutcome, ConfigViewModel, MyElectricData,
    MyElectricViewModel,
};
