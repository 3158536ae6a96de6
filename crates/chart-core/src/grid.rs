// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Pixel x for each of `count` categories; a lone category is centred.
pub fn category_positions(left: f32, right: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![(left + right) * 0.5],
        n => linspace(left as f64, right as f64, n).into_iter().map(|x| x as f32).collect(),
    }
}

/// Tick values from `min` to `max` inclusive at a fixed `step`.
pub fn stepped_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || max < min { return vec![min]; }
    let count = ((max - min) / step + 1e-9).floor() as usize;
    (0..=count).map(|i| min + step * i as f64).collect()
}
