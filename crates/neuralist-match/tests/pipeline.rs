//! End-to-end tests: raw pixels through extraction into matching.

use neuralist_match::{
    channel_block, cosine_similarity, extract_color_histogram, feature_len, find_best_match,
    find_top_k, FeatureVector, MatchError, ScoredMatch,
};

/// Build a solid-color RGB buffer.
fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    rgb.iter()
        .copied()
        .cycle()
        .take((width * height * 3) as usize)
        .collect()
}

/// Build an RGB buffer whose left half is `left` and right half is `right`.
fn split(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for x in 0..width {
            let px = if x < width / 2 { left } else { right };
            data.extend_from_slice(&px);
        }
    }
    data
}

fn features(data: &[u8], width: u32, height: u32) -> FeatureVector {
    extract_color_histogram(data, width, height, 3).unwrap()
}

#[test]
fn test_catalog_lookup_by_color() {
    let catalog: Vec<FeatureVector> = vec![
        features(&solid(8, 8, [255, 0, 0]), 8, 8),
        features(&solid(16, 4, [0, 255, 0]), 16, 4),
        features(&split(10, 10, [0, 0, 255], [255, 0, 0]), 10, 10),
        features(&solid(3, 3, [0, 0, 255]), 3, 3),
    ];

    // A larger photo of the same solid blue product
    let query = features(&solid(64, 48, [0, 0, 255]), 64, 48);

    assert_eq!(find_best_match(&query, &catalog), Some(3));

    let top = find_top_k(&query, &catalog, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].index, 3);
    assert!((top[0].score - 1.0).abs() < 1e-9);
    assert_eq!(top[1].index, 2);
    assert!(top[1].score > 0.0 && top[1].score < 1.0);
}

#[test]
fn test_mixed_channel_catalog_skips_other_lengths() {
    let gray = extract_color_histogram(&[128u8; 16], 4, 4, 1).unwrap();
    let rgb = features(&solid(4, 4, [128, 128, 128]), 4, 4);
    let catalog = vec![gray, rgb.clone()];

    assert_eq!(find_best_match(&rgb, &catalog), Some(1));
    let top = find_top_k(&rgb, &catalog, 5);
    assert_eq!(top.len(), 1);
    let ScoredMatch { index, score } = top[0];
    assert_eq!(index, 1);
    assert!((score - 1.0).abs() < 1e-9);
}

#[test]
fn test_histogram_properties_hold_for_arbitrary_sizes() {
    for (w, h) in [(1, 1), (3, 7), (13, 2), (32, 32)] {
        let data: Vec<u8> = (0..w * h * 3).map(|i| (i * 31 % 251) as u8).collect();
        let f = features(&data, w, h);
        assert_eq!(f.len(), feature_len(3));
        for c in 0..3 {
            let sum: f64 = channel_block(&f, c).unwrap().iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{w}x{h} channel {c} sums to {sum}");
        }
    }
}

#[test]
fn test_blank_image_matches_nothing_meaningfully() {
    let blank = extract_color_histogram(&[], 0, 0, 3).unwrap();
    let other = features(&solid(2, 2, [1, 2, 3]), 2, 2);
    assert_eq!(cosine_similarity(&blank, &other), 0.0);
}

#[test]
fn test_truncated_buffer_is_rejected() {
    let data = solid(4, 4, [9, 9, 9]);
    let err = extract_color_histogram(&data[..data.len() - 1], 4, 4, 3).unwrap_err();
    assert!(matches!(err, MatchError::InvalidInput(_)));
}
