// Tolerances for comparing derived layout values

pub const EPS_SCALE: f64 = 1e-9;   // relative slack for fit checks
pub const EPS_LEN: f64 = 1e-12;    // zero-length threshold

#[inline] pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 { x.max(lo).min(hi) }

/// Relative comparison; anything within `EPS_LEN` of zero matches.
#[inline]
pub fn approx_eq_rel(a: f64, b: f64, rel: f64) -> bool {
    let scale = a.abs().max(b.abs());
    if scale <= EPS_LEN { true } else { (a - b).abs() <= rel * scale }
}
