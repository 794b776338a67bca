//! Tests for reading block directories into manifests.

use scorpion_core::{Atom, AtomType};
use scorpion_error::ScorpionErrorKind;
use scorpion_storage::{BlockLoader, StorageRoots};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HOUR: &str = "Hour 2 - Infection Control";

fn block_dir(primary: &TempDir) -> PathBuf {
    let dir = primary.path().join(HOUR).join("block_012");
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn atom_types(atoms: &[Atom]) -> Vec<AtomType> {
    atoms.iter().map(Atom::atom_type).collect()
}

#[tokio::test]
async fn test_empty_block_directory() {
    let primary = TempDir::new().unwrap();
    let dir = block_dir(&primary);
    let loader = BlockLoader::new(StorageRoots::new(primary.path()));

    let block = loader.load(&dir, HOUR).await.unwrap();

    assert_eq!(block.block_id(), "012");
    assert_eq!(block.block_title(), "Block 012");
    assert_eq!(block.lesson_title(), "Infection Control");
    assert_eq!(block.hour_name(), "Hour 2");
    assert_eq!(atom_types(block.atoms()), vec![AtomType::Script]);

    let Atom::Script(script) = &block.atoms()[0] else {
        panic!("expected script atom");
    };
    assert_eq!(script.metadata().full_script(), "");
}

#[tokio::test]
async fn test_full_primary_block() {
    let primary = TempDir::new().unwrap();
    let dir = block_dir(&primary);
    fs::write(dir.join("script.txt"), "Wash your hands.").unwrap();
    fs::write(
        dir.join("image_prompts.txt"),
        "IMAGE 1 (0:00):\nA sink.\n\nIMAGE 2 (0:10):\nA towel.\n",
    )
    .unwrap();
    fs::write(dir.join("slide_b.png"), b"png").unwrap();
    fs::write(dir.join("slide_a.jpg"), b"jpg").unwrap();
    fs::write(dir.join("audio.wav"), b"RIFF").unwrap();
    fs::write(dir.join("notes.png"), b"png").unwrap();

    let loader = BlockLoader::new(StorageRoots::new(primary.path()));
    let block = loader.load(&dir, HOUR).await.unwrap();

    assert_eq!(
        atom_types(block.atoms()),
        vec![
            AtomType::Script,
            AtomType::Visual,
            AtomType::Visual,
            AtomType::Audio
        ]
    );

    let Some(Atom::Visual(first)) = block.atom("vis-012-a") else {
        panic!("expected visual atom for slide a");
    };
    assert_eq!(first.asset_id(), "block_012/slide_a.jpg");
    assert_eq!(first.metadata().prompt(), "A sink.");
    assert_eq!(first.metadata().description(), "Timestamp: 0:00");

    let Some(Atom::Visual(second)) = block.atom("vis-012-b") else {
        panic!("expected visual atom for slide b");
    };
    assert_eq!(second.metadata().prompt(), "A towel.");

    assert_eq!(
        block.atoms()[3].asset_id(),
        Some("block_012/audio.wav")
    );
}

#[tokio::test]
async fn test_secondary_media_and_prompts() {
    let primary = TempDir::new().unwrap();
    let secondary = TempDir::new().unwrap();
    let dir = block_dir(&primary);
    let generated = secondary.path().join("block_012");
    fs::create_dir_all(generated.join("images")).unwrap();
    fs::write(generated.join("images/slide_a.png"), b"png").unwrap();
    fs::write(generated.join("audio.wav"), b"RIFF").unwrap();
    fs::write(generated.join("prompts_debug.md"), "IMAGE 1:\nGenerated prompt.\n").unwrap();

    let loader = BlockLoader::new(
        StorageRoots::new(primary.path()).with_secondary_root(secondary.path()),
    );
    let block = loader.load(&dir, HOUR).await.unwrap();

    assert_eq!(
        atom_types(block.atoms()),
        vec![AtomType::Script, AtomType::Visual, AtomType::Audio]
    );
    let Some(Atom::Visual(visual)) = block.atom("vis-012-a") else {
        panic!("expected visual atom");
    };
    assert_eq!(visual.metadata().prompt(), "Generated prompt.");
    assert_eq!(visual.metadata().description(), "Slide A");
}

#[tokio::test]
async fn test_primary_prompts_preferred() {
    let primary = TempDir::new().unwrap();
    let secondary = TempDir::new().unwrap();
    let dir = block_dir(&primary);
    fs::write(dir.join("slide_a.png"), b"png").unwrap();
    fs::write(dir.join("prompts_debug.md"), "IMAGE 1:\nCurated.\n").unwrap();
    let generated = secondary.path().join("block_012");
    fs::create_dir_all(&generated).unwrap();
    fs::write(generated.join("image_prompts.txt"), "IMAGE 1:\nGenerated.\n").unwrap();

    let loader = BlockLoader::new(
        StorageRoots::new(primary.path()).with_secondary_root(secondary.path()),
    );
    let block = loader.load(&dir, HOUR).await.unwrap();

    let Some(Atom::Visual(visual)) = block.atom("vis-012-a") else {
        panic!("expected visual atom");
    };
    assert_eq!(visual.metadata().prompt(), "Curated.");
}

#[tokio::test]
async fn test_sidecar_overrides_defaults() {
    let primary = TempDir::new().unwrap();
    let dir = block_dir(&primary);
    fs::write(
        dir.join("manifest.json"),
        r#"{"title": "Glove Removal", "tdlr_citation": "§83.102", "content": {"law": "Dispose after use."}}"#,
    )
    .unwrap();

    let loader = BlockLoader::new(StorageRoots::new(primary.path()));
    let block = loader.load(&dir, HOUR).await.unwrap();

    assert_eq!(block.block_title(), "Glove Removal");
    assert_eq!(block.tdlr_citation(), "§83.102");
    let Atom::Script(script) = &block.atoms()[0] else {
        panic!("expected script atom");
    };
    assert_eq!(script.content().the_law(), "Dispose after use.");
    assert_eq!(script.content().scenario(), "N/A");
}

#[tokio::test]
async fn test_malformed_sidecar_falls_back_to_defaults() {
    let primary = TempDir::new().unwrap();
    let dir = block_dir(&primary);
    fs::write(dir.join("manifest.json"), "{ not json").unwrap();

    let loader = BlockLoader::new(StorageRoots::new(primary.path()));
    let block = loader.load(&dir, HOUR).await.unwrap();

    assert_eq!(block.block_title(), "Block 012");
    assert_eq!(block.tdlr_citation(), "§83.100");
}

#[tokio::test]
async fn test_loading_is_deterministic() {
    let primary = TempDir::new().unwrap();
    let dir = block_dir(&primary);
    for name in ["slide_c.png", "slide_a.png", "slide_b.webp", "audio.wav"] {
        fs::write(dir.join(name), b"x").unwrap();
    }
    let loader = BlockLoader::new(StorageRoots::new(primary.path()));

    let first = serde_json::to_string(&loader.load(&dir, HOUR).await.unwrap()).unwrap();
    let second = serde_json::to_string(&loader.load(&dir, HOUR).await.unwrap()).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_or_non_block_directory() {
    let primary = TempDir::new().unwrap();
    let loader = BlockLoader::new(StorageRoots::new(primary.path()));

    let err = loader
        .load(&primary.path().join(HOUR).join("block_404"), HOUR)
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ScorpionErrorKind::NotFound(_)));

    let err = loader.load(primary.path(), "").await.unwrap_err();
    assert!(matches!(err.kind(), ScorpionErrorKind::NotFound(_)));
}
