use std::time::Duration;

/// One plotted point: (sample index, value in milliseconds).
pub type Point = (f64, f64);

pub fn to_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Point `i` is `(i, samples[i])`.
pub fn raw(samples: &[Duration]) -> Vec<Point> {
    samples
        .iter()
        .enumerate()
        .map(|(i, &d)| (i as f64, to_ms(d)))
        .collect()
}

/// Point `i` is the mean of `samples[0..=i]`.
pub fn running_average(samples: &[Duration]) -> Vec<Point> {
    let mut sum = 0.0;
    samples
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            sum += to_ms(d);
            (i as f64, sum / (i + 1) as f64)
        })
        .collect()
}
