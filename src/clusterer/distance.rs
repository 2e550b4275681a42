use crate::dataset::Position;

pub fn euclidean_distance(a: &Position, b: &Position) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
