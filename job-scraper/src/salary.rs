/// Currency code HeadHunter uses for roubles
pub const HH_REFERENCE_CURRENCY: &str = "RUR";
/// Currency code SuperJob uses for roubles
pub const SUPERJOB_REFERENCE_CURRENCY: &str = "rub";

const ONLY_UPPER_FACTOR: f64 = 0.8;
const ONLY_LOWER_FACTOR: f64 = 1.2;

/// Turn a salary range into a single point estimate.
/// Bounds must already be normalized: `None` means the bound is unspecified.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    match (from, to) {
        (None, None) => None,
        (None, Some(to)) => Some(to * ONLY_UPPER_FACTOR),
        (Some(from), None) => Some(from * ONLY_LOWER_FACTOR),
        (Some(from), Some(to)) => Some((from + to) / 2.0),
    }
}

/// Estimate for sources that encode a missing bound as `null`.
/// A zero is treated as missing as well.
pub fn predict_rub_salary_nullable(
    currency: Option<&str>,
    from: Option<f64>,
    to: Option<f64>,
    reference: &str,
) -> Option<f64> {
    if currency != Some(reference) {
        return None;
    }
    predict_salary(from.filter(|v| *v != 0.0), to.filter(|v| *v != 0.0))
}

/// Estimate for sources that encode a missing bound as a literal `0`.
pub fn predict_rub_salary_zeroed(
    currency: &str,
    from: f64,
    to: f64,
    reference: &str,
) -> Option<f64> {
    if currency != reference {
        return None;
    }
    let bound = |value: f64| (value != 0.0).then_some(value);
    predict_salary(bound(from), bound(to))
}
