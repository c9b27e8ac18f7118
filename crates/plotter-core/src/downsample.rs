// File: crates/plotter-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets reduction for (time, value) samples.

/// Reduce `points` to at most `threshold` samples while keeping the visual
/// shape. The first and last samples are always kept; order is preserved.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    // interior samples are split into threshold - 2 buckets
    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let bucket_bounds = |i: usize| -> (usize, usize) {
        let start = (1.0 + i as f64 * bucket_size).floor() as usize;
        let end = ((1.0 + (i + 1) as f64 * bucket_size).floor() as usize).min(n - 1);
        (start, end.max(start + 1))
    };

    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);
    let mut anchor = points[0];

    for i in 0..(threshold - 2) {
        let (start, end) = bucket_bounds(i);

        // centroid of the following bucket, or the last sample for the final bucket
        let (avg_x, avg_y) = if i + 1 < threshold - 2 {
            let (ns, ne) = bucket_bounds(i + 1);
            let bucket = &points[ns..ne];
            let count = bucket.len() as f64;
            let (sx, sy) = bucket.iter().fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
            (sx / count, sy / count)
        } else {
            points[n - 1]
        };

        let (ax, ay) = anchor;
        let mut best = points[start];
        let mut best_area = -1.0f64;
        for &(x, y) in &points[start..end] {
            let area = ((ax - avg_x) * (y - ay) - (ax - x) * (avg_y - ay)).abs();
            if area > best_area {
                best_area = area;
                best = (x, y);
            }
        }
        sampled.push(best);
        anchor = best;
    }

    sampled.push(points[n - 1]);
    sampled
}
