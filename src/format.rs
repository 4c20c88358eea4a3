//! @acp:module "Formatting"
//! @acp:summary "Display formatting for amounts and scalar quantities"
//! @acp:domain estimate
//! @acp:layer utility

/// Amount rounded to whole currency units, e.g. `1500 €`
pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{:.0} {}", value.round(), currency)
}

/// Scalar without a trailing `.0` for whole values
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
