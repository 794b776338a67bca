//! Tests for block discovery and text edits.

use scorpion_error::ScorpionErrorKind;
use scorpion_storage::{AssetKind, BlockStore, StorageRoots};
use std::fs;
use tempfile::TempDir;

fn layout() -> TempDir {
    let primary = TempDir::new().unwrap();
    for dir in [
        "Hour 2 - Tools/block_010",
        "Hour 1 - Sanitation/block_002",
        "Hour 1 - Sanitation/block_001",
        "Hour 1 - Sanitation/images",
    ] {
        fs::create_dir_all(primary.path().join(dir)).unwrap();
    }
    fs::write(primary.path().join("README.txt"), "not an hour").unwrap();
    fs::write(
        primary.path().join("Hour 1 - Sanitation/block_003"),
        "a file, not a block",
    )
    .unwrap();
    primary
}

#[tokio::test]
async fn test_list_blocks_sorted() {
    let primary = layout();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let blocks = store.list_blocks().await.unwrap();

    assert_eq!(
        blocks,
        vec![
            "Hour 1 - Sanitation/block_001",
            "Hour 1 - Sanitation/block_002",
            "Hour 2 - Tools/block_010",
        ]
    );
}

#[tokio::test]
async fn test_list_blocks_empty_root() {
    let primary = TempDir::new().unwrap();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    assert!(store.list_blocks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_write_script() {
    let primary = layout();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let path = store
        .write_asset("010", AssetKind::Script, "New narration.")
        .await
        .unwrap();

    assert_eq!(path, primary.path().join("Hour 2 - Tools/block_010/script.txt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "New narration.");
}

#[tokio::test]
async fn test_write_prompts_defaults_to_image_prompts_txt() {
    let primary = layout();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let path = store
        .write_asset("001", AssetKind::ImagePrompts, "IMAGE 1:\nA sink.\n")
        .await
        .unwrap();

    assert!(path.ends_with("block_001/image_prompts.txt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "IMAGE 1:\nA sink.\n");
}

#[tokio::test]
async fn test_write_prompts_keeps_existing_document() {
    let primary = layout();
    let block = primary.path().join("Hour 1 - Sanitation/block_002");
    fs::write(block.join("prompts_debug.md"), "IMAGE 1:\nOld.\n").unwrap();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let path = store
        .write_asset("002", AssetKind::ImagePrompts, "IMAGE 1:\nNew.\n")
        .await
        .unwrap();

    assert_eq!(path, block.join("prompts_debug.md"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "IMAGE 1:\nNew.\n");
    assert!(!block.join("image_prompts.txt").exists());
}

#[tokio::test]
async fn test_write_overwrites_whole_file() {
    let primary = layout();
    let block = primary.path().join("Hour 1 - Sanitation/block_001");
    fs::write(block.join("script.txt"), "A much longer original script.").unwrap();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    store
        .write_asset("001", AssetKind::Script, "Short.")
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(block.join("script.txt")).unwrap(), "Short.");
    let leftovers: Vec<_> = fs::read_dir(&block)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|n| n.to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_overlapping_writes_last_writer_wins() {
    let primary = layout();
    let block = primary.path().join("Hour 1 - Sanitation/block_001");
    let store = BlockStore::new(StorageRoots::new(primary.path()));
    let long = "x".repeat(200_000);
    let short = "short text";

    for _ in 0..50 {
        let (a, b) = tokio::join!(
            store.write_asset("001", AssetKind::Script, &long),
            store.write_asset("001", AssetKind::Script, short),
        );
        a.unwrap();
        b.unwrap();

        let written = fs::read_to_string(block.join("script.txt")).unwrap();
        assert!(written == long || written == short);
    }

    let leftovers: Vec<_> = fs::read_dir(&block)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|n| n.to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_block_id_starting_with_dash_is_rejected() {
    let primary = layout();
    fs::create_dir_all(primary.path().join("Hour 1 - Sanitation/block_-1")).unwrap();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let err = store
        .write_asset("-1", AssetKind::Script, "x")
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ScorpionErrorKind::Validation(_)));
    assert!(
        !primary
            .path()
            .join("Hour 1 - Sanitation/block_-1/script.txt")
            .exists()
    );
}

#[tokio::test]
async fn test_unknown_block_is_not_found_and_nothing_written() {
    let primary = layout();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let err = store
        .write_asset("999", AssetKind::Script, "orphan")
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), ScorpionErrorKind::NotFound(_)));
    assert!(!primary.path().join("block_999").exists());
    for hour in ["Hour 1 - Sanitation", "Hour 2 - Tools"] {
        assert!(!primary.path().join(hour).join("block_999").exists());
    }
}

#[tokio::test]
async fn test_file_named_like_block_is_ignored() {
    let primary = layout();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let err = store.find_block_dir("003").await.unwrap_err();
    assert!(matches!(err.kind(), ScorpionErrorKind::NotFound(_)));
}

#[tokio::test]
async fn test_block_id_with_separator_is_rejected() {
    let primary = layout();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let err = store
        .write_asset("../block_001", AssetKind::Script, "x")
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ScorpionErrorKind::Validation(_)));
}

#[tokio::test]
async fn test_write_prompt_entry_preserves_other_entries() {
    let primary = layout();
    let block = primary.path().join("Hour 1 - Sanitation/block_001");
    fs::write(
        block.join("image_prompts.txt"),
        "IMAGE 1 (0:00):\nA sink.\n\nIMAGE 2 (0:10):\nA towel.\n",
    )
    .unwrap();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let path = store
        .write_prompt_entry("001", 2, "A folded towel.")
        .await
        .unwrap();

    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "IMAGE 1 (0:00):\nA sink.\n\nIMAGE 2 (0:10):\nA folded towel.\n"
    );
}

#[tokio::test]
async fn test_write_prompt_entry_creates_document() {
    let primary = layout();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let path = store
        .write_prompt_entry("010", 1, "A comb in disinfectant.")
        .await
        .unwrap();

    assert!(path.ends_with("block_010/image_prompts.txt"));
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "IMAGE 1:\nA comb in disinfectant.\n"
    );
}

#[tokio::test]
async fn test_write_prompt_entry_unknown_block() {
    let primary = layout();
    let store = BlockStore::new(StorageRoots::new(primary.path()));

    let err = store.write_prompt_entry("404", 1, "x").await.unwrap_err();
    assert!(matches!(err.kind(), ScorpionErrorKind::NotFound(_)));
}
