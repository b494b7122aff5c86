//! Display Formatting
//!
//! Pure mappings from numeric readings to label text.

/// Format an instantaneous power reading, e.g. `312W`.
pub fn format_power(watts: f64) -> String {
    format!("{}W", watts.round() as i64)
}

/// Format an energy total, e.g. `5.4kWh`.
pub fn format_energy(kwh: f64) -> String {
    format!("{:.1}kWh", kwh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_is_rounded_with_watt_suffix() {
        assert_eq!(format_power(312.0), "312W");
        assert_eq!(format_power(311.5), "312W");
        assert_eq!(format_power(311.4), "311W");
        assert_eq!(format_power(0.0), "0W");
        assert_eq!(format_power(2480.7), "2481W");
    }

    #[test]
    fn energy_keeps_one_decimal_with_kwh_suffix() {
        assert_eq!(format_energy(5.4), "5.4kWh");
        assert_eq!(format_energy(5.0), "5.0kWh");
        assert_eq!(format_energy(12.345), "12.3kWh");
        assert_eq!(format_energy(0.0), "0.0kWh");
    }
}
