//! End-to-end pipeline behavior and JSON serialization round-trips

use quantica::ArtError;
use quantica::io::export::write_collection;
use quantica::pipeline::{ArtCollection, generate_collection, generate_piece};
use rand::{SeedableRng, rngs::StdRng};

fn is_hex_color(pixel: &str) -> bool {
    let mut chars = pixel.chars();
    pixel.len() == 7
        && chars.next() == Some('#')
        && chars.all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
}

#[test]
fn test_single_small_piece_end_to_end() {
    let mut rng = StdRng::seed_from_u64(99);
    let collection = generate_collection(1, 4, &mut rng).expect("Failed to generate collection");

    assert_eq!(collection.len(), 1);

    let piece = collection.pieces().first().expect("Missing piece");
    assert_eq!(piece.width, 4);
    assert_eq!(piece.height, 4);
    assert_eq!(piece.pixels.len(), 4);
    for row in &piece.pixels {
        assert_eq!(row.len(), 4);
        for pixel in row {
            assert!(is_hex_color(pixel), "Malformed pixel string: {pixel}");
        }
    }
}

#[test]
fn test_collection_cardinality_matches_count() {
    let mut rng = StdRng::seed_from_u64(11);
    let collection = generate_collection(5, 8, &mut rng).expect("Failed to generate collection");

    assert_eq!(collection.len(), 5);
    assert!(!collection.is_empty());
}

#[test]
fn test_distinct_seeds_produce_distinct_pixels() {
    let mut first_rng = StdRng::seed_from_u64(1);
    let mut second_rng = StdRng::seed_from_u64(2);

    let first = generate_collection(1, 8, &mut first_rng).expect("Failed to generate collection");
    let second = generate_collection(1, 8, &mut second_rng).expect("Failed to generate collection");

    assert_ne!(
        first, second,
        "Fresh randomness should produce different pixel arrays"
    );
}

#[test]
fn test_same_seed_reproduces_collection() {
    let mut first_rng = StdRng::seed_from_u64(77);
    let mut second_rng = StdRng::seed_from_u64(77);

    let first = generate_collection(2, 8, &mut first_rng).expect("Failed to generate collection");
    let second = generate_collection(2, 8, &mut second_rng).expect("Failed to generate collection");

    assert_eq!(first, second);
}

#[test]
fn test_zero_size_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate_piece(0, &mut rng).expect_err("Zero size should be rejected");

    assert!(
        matches!(err, ArtError::InvalidParameter { parameter: "size", .. }),
        "Expected InvalidParameter, got: {err}"
    );
}

#[test]
fn test_written_collection_round_trips_through_json() {
    let mut rng = StdRng::seed_from_u64(8);
    let collection = generate_collection(2, 4, &mut rng).expect("Failed to generate collection");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("quantum_art.json");
    write_collection(&collection, &path).expect("Failed to write collection");

    let contents = std::fs::read_to_string(&path).expect("Failed to read output file");
    let parsed: serde_json::Value =
        serde_json::from_str(&contents).expect("Output should be valid JSON");

    let records = parsed.as_array().expect("Top level should be an array");
    assert_eq!(records.len(), 2);

    let record = records.first().expect("Missing first record");
    for key in ["pixels", "width", "height"] {
        assert!(
            record.get(key).is_some(),
            "Record should carry a '{key}' field"
        );
    }
    assert_eq!(record.get("width"), Some(&serde_json::json!(4)));
    assert_eq!(record.get("height"), Some(&serde_json::json!(4)));

    let reloaded: ArtCollection =
        serde_json::from_str(&contents).expect("Output should deserialize back");
    assert_eq!(reloaded, collection);
}

#[test]
fn test_write_to_missing_directory_surfaces_error() {
    let mut rng = StdRng::seed_from_u64(8);
    let collection = generate_collection(1, 4, &mut rng).expect("Failed to generate collection");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("quantum_art.json");
    let err = write_collection(&collection, &path).expect_err("Write should fail");

    assert!(
        matches!(err, ArtError::FileSystem { .. }),
        "Expected FileSystem error, got: {err}"
    );
}
