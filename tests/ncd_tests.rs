//! Integration tests for Normalized Compression Distance matrices

use spikeplex::matrix::DistanceMatrix;
use spikeplex::ncd::{cluster_reorder, ncd, ncd_matrix, Compressor, LinkageMethod, NcdLayout};
use spikeplex::ppm::PpmConfig;
use spikeplex::synthetic::{bernoulli_trains, tiled};
use spikeplex::Result;

/// Two families: periodic trains and random trains
fn two_families() -> Vec<Vec<u8>> {
    let mut seqs = bernoulli_trains(2, 400, 0.5, 77).unwrap();
    seqs.insert(1, tiled(&[1u8, 0, 0, 0], 100));
    seqs.push(tiled(&[1u8, 0, 0, 0, 0], 80));
    seqs
}

#[test]
fn test_lz_matrix_groups_families() {
    let seqs = two_families();
    let matrix = ncd_matrix(&seqs, &Compressor::Lz, NcdLayout::Symmetric, 0).unwrap();
    let m = matrix.as_square().unwrap();

    assert_eq!(m.size(), 4);
    assert!(m.is_symmetric());
    for i in 0..4 {
        assert!(m.get(i, i) < 0.1, "self-distance {} = {}", i, m.get(i, i));
    }
    // Random-random is far apart
    assert!(m.get(0, 2) > 0.5);
}

#[test]
fn test_ppm_self_distance_of_structured_train() {
    // An order-3 model only learns short contexts, so the repeat is cheap
    // for a periodic train but not for a random one
    let periodic = tiled(&[1u8, 0, 1], 20);
    let d = ncd(&periodic, &periodic, &Compressor::Ppm(PpmConfig::binary())).unwrap();
    assert!(d < 0.5, "self-distance = {}", d);
}

#[test]
fn test_all_compressors_fill_the_matrix() {
    let seqs = bernoulli_trains(3, 120, 0.4, 21).unwrap();
    for name in [
        "gzip",
        "gzip_padded",
        "bz2",
        "snappy",
        "zstd",
        "lz",
        "nlz",
        "ppm",
    ] {
        let compressor: Compressor = name.parse().unwrap();
        let matrix = ncd_matrix(&seqs, &compressor, NcdLayout::Condensed, 2).unwrap();
        let values = matrix.as_condensed().unwrap();
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| v.is_finite()), "{}: {:?}", name, values);
    }
}

#[test]
fn test_cluster_reorder_with_external_linkage() {
    let seqs = two_families();
    let matrix = ncd_matrix(&seqs, &Compressor::Lz, NcdLayout::Symmetric, 2).unwrap();
    let square: &DistanceMatrix = matrix.as_square().unwrap();

    // Stand-in collaborator: order leaves by distance to the first sequence
    let nearest_first = |condensed: &[f64], n: usize, method: LinkageMethod| -> Result<Vec<usize>> {
        assert_eq!(method, LinkageMethod::Average);
        assert_eq!(condensed.len(), n * (n - 1) / 2);
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            let key = |i: usize| if i == 0 { 0.0 } else { condensed[i - 1] };
            key(a).total_cmp(&key(b))
        });
        Ok(order)
    };

    let clustered = cluster_reorder(square, &nearest_first).unwrap();
    assert_eq!(clustered.leaf_order[0], 0);
    let mut sorted = clustered.leaf_order.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3]);

    for (i, &src_i) in clustered.leaf_order.iter().enumerate() {
        for (j, &src_j) in clustered.leaf_order.iter().enumerate() {
            assert_eq!(clustered.matrix.get(i, j), square.get(src_i, src_j));
        }
    }
}
