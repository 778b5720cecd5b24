use summit::{compute_layout, Mountain, ScaleOptions, Viewport};
use std::time::Instant;

fn build_peaks(count: usize) -> Vec<Mountain> {
    // Deterministic spread of shapes, tall-and-thin through short-and-wide
    (0..count)
        .map(|i| {
            let h = 500.0 + ((i * 7919) % 8000) as f64;
            let w = 300.0 + ((i * 104_729) % 7000) as f64;
            Mountain::new(format!("m{}", i), format!("Peak {}", i), h, w)
        })
        .collect()
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut peaks = 10usize;
    let mut iters = 100_000usize;
    let mut assert_us: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--peaks=") { if let Ok(v)=val.parse() { peaks=v; } }
        else if let Some(val)=a.strip_prefix("--iters=") { if let Ok(v)=val.parse() { iters=v; } }
        else if let Some(val)=a.strip_prefix("--assert-us=") { if let Ok(v)=val.parse() { assert_us=Some(v); } }
    }

    let ms = build_peaks(peaks);
    let opts = ScaleOptions::default();
    let mut times_us: Vec<f64> = Vec::with_capacity(iters);
    let start_all = Instant::now();
    let mut shapes = 0usize;
    for k in 0..iters {
        // Sweep viewports across all breakpoints
        let vw = 320.0 + (k % 1800) as f64;
        let vh = 480.0 + (k % 700) as f64;
        let t0 = Instant::now();
        shapes += compute_layout(&ms, Viewport::new(vw, vh), &opts).shapes.len();
        times_us.push(t0.elapsed().as_secs_f64() * 1e6);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_us.sort_by(|a, b| a.total_cmp(b));
    let med = percentile(&times_us, 0.5);
    let p90 = percentile(&times_us, 0.9);
    let p99 = percentile(&times_us, 0.99);
    println!("peaks={} iters={} shapes={} total_ms={:.3} median_us={:.3} p90_us={:.3} p99_us={:.3}", peaks, iters, shapes, dur_all, med, p90, p99);
    if let Some(th) = assert_us { if med > th { eprintln!("FAIL: median {:.3} us > threshold {:.3} us", med, th); std::process::exit(1); } }
}
