//! End-to-end pair generation over image lists and feature stores.

use std::collections::HashSet;
use std::path::PathBuf;

use rig_pairs::{
    generate_pairs, write_pairs, NameSource, PairError, PairingConfig, SqliteFeatureStore,
};

fn rig_names(frames: u64, cameras: u32) -> Vec<String> {
    (0..frames)
        .flat_map(|f| (0..cameras).map(move |c| format!("frame_{:06}_{:02}.jpg", f, c)))
        .collect()
}

fn pair(a: &str, b: &str) -> (String, String) {
    (a.to_string(), b.to_string())
}

fn read_pairs(path: &std::path::Path) -> Vec<(String, String)> {
    std::fs::read_to_string(path)
        .expect("read pairs")
        .lines()
        .map(|line| {
            let (a, b) = line.split_once(' ').expect("two columns");
            (a.to_string(), b.to_string())
        })
        .collect()
}

#[test]
fn image_list_to_pair_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let list = dir.path().join("images.txt");
    std::fs::write(
        &list,
        "frame_000000_00.jpg\nframe_000000_01.jpg\nframe_000001_00.jpg\n",
    )
    .expect("write list");
    let output = dir.path().join("pairs.txt");

    let source = NameSource::from_options(vec![list], None).expect("select source");
    let names = source.load().expect("load names");
    let cfg = PairingConfig {
        ring_size: 2,
        step_size: 2,
        radius: 1,
        wraparound: true,
    };
    let pairs = generate_pairs(&names, &cfg).expect("generate");
    write_pairs(&output, &pairs).expect("write");

    let raw = std::fs::read_to_string(&output).expect("read output");
    assert!(!raw.ends_with('\n'));
    assert_eq!(
        read_pairs(&output),
        vec![
            pair("frame_000000_00.jpg", "frame_000000_01.jpg"),
            pair("frame_000000_00.jpg", "frame_000001_00.jpg"),
            pair("frame_000000_01.jpg", "frame_000001_00.jpg"),
        ]
    );
}

#[test]
fn split_list_files_are_concatenated_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let names = rig_names(3, 4);
    let first = dir.path().join("part0.txt");
    let second = dir.path().join("part1.txt");
    std::fs::write(&first, names[..6].join("\n")).expect("write part0");
    std::fs::write(&second, names[6..].join("\n")).expect("write part1");

    let loaded = NameSource::ListFiles(vec![first, second])
        .load()
        .expect("load names");
    assert_eq!(loaded, names);
}

#[test]
fn default_rig_pairs_stay_within_window_and_radius() {
    let names = rig_names(6, 10);
    let cfg = PairingConfig::default();
    let pairs = generate_pairs(&names, &cfg).expect("generate");

    for candidate in &pairs {
        let a = rig_pairs::FrameName::parse(candidate.anchor).expect("anchor");
        let b = rig_pairs::FrameName::parse(candidate.partner).expect("partner");
        assert!(b.frame_index >= a.frame_index);
        assert!(b.frame_index < a.frame_index + cfg.step_size);
        let diff = (a.camera_index as i64 - b.camera_index as i64).rem_euclid(10);
        let ring_distance = diff.min(10 - diff);
        assert!(ring_distance <= cfg.radius as i64, "{candidate}");
    }

    // Same-instant neighbors across the 9/0 seam are present exactly once.
    let seam: Vec<_> = pairs
        .iter()
        .filter(|p| p.canonical_key() == ("frame_000000_00.jpg", "frame_000000_09.jpg"))
        .collect();
    assert_eq!(seam.len(), 1);
    assert_eq!(seam[0].anchor, "frame_000000_00.jpg");

    let keys: HashSet<_> = pairs.iter().map(|p| p.canonical_key()).collect();
    assert_eq!(keys.len(), pairs.len());
}

#[test]
fn feature_store_names_drive_generation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("features.db");
    {
        let mut store = SqliteFeatureStore::create(&db).expect("create store");
        for name in rig_names(2, 3).iter().rev() {
            store.add_image(name, 0).expect("add image");
        }
    }

    let source = NameSource::from_options(Vec::new(), Some(db)).expect("select source");
    let names = source.load().expect("load names");
    assert_eq!(names, rig_names(2, 3));

    let cfg = PairingConfig {
        ring_size: 3,
        step_size: 2,
        radius: 1,
        wraparound: false,
    };
    let pairs = generate_pairs(&names, &cfg).expect("generate");
    assert!(pairs
        .iter()
        .all(|p| p.canonical_key() != ("frame_000000_00.jpg", "frame_000000_02.jpg")));
    assert!(pairs
        .iter()
        .any(|p| p.canonical_key() == ("frame_000000_00.jpg", "frame_000001_01.jpg")));
}

#[test]
fn missing_input_is_a_selection_error() {
    let err = NameSource::from_options(Vec::new(), None).unwrap_err();
    assert!(matches!(err, PairError::InputSelection(_)));
}

#[test]
fn malformed_anchor_leaves_no_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output: PathBuf = dir.path().join("pairs.txt");
    let names = vec![
        "frame_000000_00.jpg".to_string(),
        "frame-000000-01.jpg".to_string(),
        "frame_000001_00.jpg".to_string(),
    ];

    let result = generate_pairs(&names, &PairingConfig::default())
        .and_then(|pairs| write_pairs(&output, &pairs));
    assert!(matches!(result, Err(PairError::MalformedName { .. })));
    assert!(!output.exists());
}
