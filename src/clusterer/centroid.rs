use crate::dataset::Position;

pub fn compute_centroid(members: &[&Position]) -> Position {
    let mut out = [0.0; 3];

    for p in members {
        for i in 0..3 {
            out[i] += p[i];
        }
    }

    let n = members.len() as f64;
    for v in out.iter_mut() {
        *v /= n;
    }

    out
}
