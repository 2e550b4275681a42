use super::*;
use crate::dataset::{Dataset, Position, SkillPoint};
use std::collections::HashSet;

fn builtin_result() -> ClusterResult {
    assign(Dataset::builtin().points(), &ClusterParams::default()).unwrap()
}

#[test]
fn test_simple_kmeans() {
    let points: Vec<Position> = vec![
        [1.0, 0.0, 0.0],
        [0.9, 0.1, 0.0],
        [0.0, 1.0, 9.0],
        [0.1, 0.9, 9.0],
    ];

    let res = kmeans(&points, 2, 20, Initialization::FirstK).unwrap();

    assert_eq!(res.centroids.len(), 2);
    assert!(res.converged);
    assert_eq!(res.assignments[0], res.assignments[1]);
    assert_eq!(res.assignments[2], res.assignments[3]);
    assert_ne!(res.assignments[0], res.assignments[2]);
}

#[test]
fn test_centroids_are_member_means() {
    let points: Vec<Position> = vec![[0.0, 0.0, 0.0], [10.0, 10.0, 10.0], [0.0, 2.0, 0.0]];

    let res = kmeans(&points, 2, 50, Initialization::FirstK).unwrap();

    assert_eq!(res.assignments, vec![0, 1, 0]);
    assert_eq!(res.centroids[0], [0.0, 1.0, 0.0]);
    assert_eq!(res.centroids[1], [10.0, 10.0, 10.0]);
}

#[test]
fn test_iteration_cap() {
    let points: Vec<Position> = vec![
        [10.0, 5.0, 1.0],
        [10.0, 9.0, 1.0],
        [1.0, 2.0, 10.0],
        [1.0, 6.0, 8.0],
    ];

    let res = kmeans(&points, 2, 1, Initialization::FirstK).unwrap();
    assert_eq!(res.iterations, 1);
    assert!(!res.converged);
}

#[test]
fn test_kmeans_rejects_zero_clusters() {
    let points: Vec<Position> = vec![[1.0, 1.0, 1.0]];
    assert!(matches!(
        kmeans(&points, 0, 10, Initialization::FirstK),
        Err(ClusterError::InvalidInput(_))
    ));
}

#[test]
fn test_kmeans_rejects_zero_iterations() {
    let points: Vec<Position> = vec![[1.0, 1.0, 1.0], [2.0, 2.0, 2.0]];
    assert!(matches!(
        kmeans(&points, 2, 0, Initialization::FirstK),
        Err(ClusterError::InvalidInput(_))
    ));
}

#[test]
fn test_seeded_init_is_reproducible() {
    let positions = Dataset::builtin().positions();
    let init = Initialization::Seeded { seed: 42 };

    let a = kmeans(&positions, 2, 100, init).unwrap();
    let b = kmeans(&positions, 2, 100, init).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.assignments.len(), positions.len());
    assert!(a.assignments.iter().all(|&id| id < 2));
}

#[test]
fn test_assign_rejects_single_point() {
    let points = vec![SkillPoint::new("Solo", 5.0, 5.0, 5.0)];
    let err = assign(&points, &ClusterParams::default()).unwrap_err();
    assert!(matches!(err, ClusterError::InvalidInput(_)));
}

#[test]
fn test_assign_rejects_non_finite() {
    let points = vec![
        SkillPoint::new("A", 1.0, 1.0, 1.0),
        SkillPoint::new("B", f64::INFINITY, 1.0, 1.0),
    ];
    let err = assign(&points, &ClusterParams::default()).unwrap_err();
    assert!(matches!(err, ClusterError::InvalidInput(_)));
}

#[test]
fn test_assign_rejects_other_k() {
    let params = ClusterParams {
        k: 3,
        ..ClusterParams::default()
    };
    let err = assign(Dataset::builtin().points(), &params).unwrap_err();
    assert!(matches!(err, ClusterError::InvalidInput(_)));
}

#[test]
fn test_every_point_assigned_once() {
    let datasets = vec![
        Dataset::builtin().points().to_vec(),
        vec![SkillPoint::new("A", 0.0, 0.0, 0.0), SkillPoint::new("B", 10.0, 10.0, 10.0)],
        vec![
            SkillPoint::new("A", 1.0, 9.0, 2.0),
            SkillPoint::new("B", 9.0, 1.0, 2.0),
            SkillPoint::new("C", 2.0, 8.0, 3.0),
            SkillPoint::new("D", 8.0, 2.0, 7.0),
            SkillPoint::new("E", 7.0, 3.0, 5.0),
        ],
    ];

    for points in datasets {
        let res = assign(&points, &ClusterParams::default()).unwrap();
        assert_eq!(res.assignments.len(), points.len());

        let used: HashSet<ClusterId> = res.assignments.iter().copied().collect();
        assert_eq!(used, HashSet::from([0, 1]));

        let mut members: Vec<usize> = res
            .clusters
            .iter()
            .flat_map(|c| c.members.iter().copied())
            .collect();
        members.sort_unstable();
        assert_eq!(members, (0..points.len()).collect::<Vec<_>>());
    }
}

#[test]
fn test_names_are_a_bijection() {
    let res = builtin_result();
    let names: HashSet<&str> = res.clusters.iter().map(|c| c.role.name()).collect();
    assert_eq!(names, HashSet::from(["AI", "Medecine"]));
    assert_ne!(res.roles.role(0), res.roles.role(1));
    assert_eq!(res.roles.role(2), None);
}

#[test]
fn test_naming_tie_break() {
    // Centroid 0 leads on both computer science and health
    let centroids: Vec<Position> = vec![[9.0, 5.0, 9.0], [2.0, 5.0, 1.0]];
    let roles = name_centroids(&centroids).unwrap();
    assert_eq!(roles.role(0), Some(ClusterRole::Ai));
    assert_eq!(roles.role(1), Some(ClusterRole::Medecine));
}

#[test]
fn test_naming_tie_break_second_centroid() {
    let centroids: Vec<Position> = vec![[1.0, 1.0, 1.0], [9.0, 9.0, 9.0]];
    let roles = name_centroids(&centroids).unwrap();
    assert_eq!(roles.role(0), Some(ClusterRole::Medecine));
    assert_eq!(roles.role(1), Some(ClusterRole::Ai));
}

#[test]
fn test_naming_without_tie() {
    let centroids: Vec<Position> = vec![[1.0, 5.0, 9.0], [10.0, 5.0, 1.0]];
    let roles = name_centroids(&centroids).unwrap();
    assert_eq!(roles.role(0), Some(ClusterRole::Ai));
    assert_eq!(roles.role(1), Some(ClusterRole::Medecine));
    assert_eq!(roles.id_of(ClusterRole::Ai), 0);
    assert_eq!(roles.id_of(ClusterRole::Medecine), 1);
}

#[test]
fn test_naming_equal_values_take_first_index() {
    let centroids: Vec<Position> = vec![[5.0, 0.0, 5.0], [5.0, 0.0, 5.0]];
    let roles = name_centroids(&centroids).unwrap();
    assert_eq!(roles.role(0), Some(ClusterRole::Ai));
    assert_eq!(roles.role(1), Some(ClusterRole::Medecine));
}

#[test]
fn test_naming_requires_two_centroids() {
    let centroids: Vec<Position> = vec![[1.0, 1.0, 1.0]];
    assert!(name_centroids(&centroids).is_err());
}

#[test]
fn test_role_map_rejects_repeats() {
    assert!(RoleMap::new(0, 0).is_err());
    assert!(RoleMap::new(1, 2).is_err());
}

#[test]
fn test_builtin_separates_health_heavy_points() {
    let dataset = Dataset::builtin();
    let res = builtin_result();
    assert!(res.converged);

    let medecine = res.roles.id_of(ClusterRole::Medecine);
    let medecine_labels: Vec<&str> = res.clusters[medecine]
        .members
        .iter()
        .map(|&i| dataset.points()[i].label.as_str())
        .collect();
    assert_eq!(medecine_labels, vec!["DFGSM", "DFASM"]);

    let ai = res.roles.id_of(ClusterRole::Ai);
    assert_eq!(res.clusters[ai].members, vec![2, 3, 4, 5]);
    assert_eq!(res.clusters[medecine].centroid, [10.0, 7.0, 1.0]);
    assert_eq!(res.clusters[ai].centroid, [2.75, 4.75, 7.0]);

    assert_eq!(res.role_of_point(0), Some(ClusterRole::Medecine));
    assert_eq!(res.role_of_point(2), Some(ClusterRole::Ai));
}

#[test]
fn test_builtin_is_deterministic() {
    assert_eq!(builtin_result(), builtin_result());
}

#[test]
fn test_role_serializes_as_display_name() {
    assert_eq!(serde_json::to_string(&ClusterRole::Ai).unwrap(), "\"AI\"");
    assert_eq!(ClusterRole::Medecine.to_string(), "Medecine");
}

fn used_ids(assignments: &[ClusterId]) -> HashSet<ClusterId> {
    assignments.iter().copied().collect()
}

#[test]
fn test_duplicate_leading_points_use_both_clusters() {
    let points = vec![
        SkillPoint::new("A", 5.0, 5.0, 5.0),
        SkillPoint::new("B", 5.0, 5.0, 5.0),
        SkillPoint::new("C", 0.0, 0.0, 0.0),
        SkillPoint::new("D", 10.0, 10.0, 10.0),
    ];
    let dataset = Dataset::new(points).unwrap();

    let res = assign(dataset.points(), &ClusterParams::default()).unwrap();

    assert!(res.converged);
    assert_eq!(used_ids(&res.assignments), HashSet::from([0, 1]));
    assert!(res.clusters.iter().all(|c| !c.members.is_empty()));
    // A and B coincide, so they must share a cluster
    assert_eq!(res.assignments[0], res.assignments[1]);
}

#[test]
fn test_seeded_init_with_coincident_points() {
    let mut points: Vec<Position> = vec![[1.0, 1.0, 1.0]; 5];
    points.push([9.0, 9.0, 9.0]);

    for seed in 0..20 {
        let res = kmeans(&points, 2, 100, Initialization::Seeded { seed }).unwrap();
        assert_eq!(used_ids(&res.assignments), HashSet::from([0, 1]), "seed {}", seed);
        assert_ne!(res.assignments[0], res.assignments[5]);
    }
}

#[test]
fn test_identical_points_fill_both_clusters() {
    let points: Vec<Position> = vec![[4.0, 4.0, 4.0]; 3];

    let res = kmeans(&points, 2, 10, Initialization::FirstK).unwrap();

    assert!(res.converged);
    assert_eq!(used_ids(&res.assignments), HashSet::from([0, 1]));
    assert_eq!(res.centroids, vec![[4.0, 4.0, 4.0]; 2]);
}

#[test]
fn test_result_requires_a_role_per_cluster() {
    let partition = Partition {
        assignments: vec![0, 1, 2],
        centroids: vec![[0.0; 3], [1.0; 3], [2.0; 3]],
        iterations: 1,
        converged: true,
    };
    let roles = RoleMap::new(0, 1).unwrap();

    let err = ClusterResult::from_partition(partition, roles).unwrap_err();
    assert!(matches!(err, ClusterError::InvalidInput(_)));
}
