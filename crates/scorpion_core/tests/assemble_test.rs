use scorpion_core::{
    Atom, BlockSource, BlockSourceBuilder, NOT_AVAILABLE, PromptEntry, Sidecar, SidecarContent,
    assemble, parse_prompts,
};

fn source(visual_files: &[&str], prompts: Vec<PromptEntry>, audio: bool) -> BlockSource {
    BlockSourceBuilder::default()
        .block_id("007")
        .block_dir_name("block_007")
        .hour("Hour 1 - Sanitation")
        .script_text("Line one.\nLine two.")
        .prompts(prompts)
        .visual_files(
            visual_files
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>(),
        )
        .audio_present(audio)
        .build()
        .unwrap()
}

fn visuals(atoms: &[Atom]) -> Vec<&scorpion_core::VisualAtom> {
    atoms
        .iter()
        .filter_map(|atom| match atom {
            Atom::Visual(v) => Some(v),
            _ => None,
        })
        .collect()
}

#[test]
fn test_empty_block_has_only_script_atom() {
    let block = assemble(&source(&[], vec![], false));
    assert_eq!(block.atoms().len(), 1);

    let Atom::Script(script) = &block.atoms()[0] else {
        panic!("expected script atom");
    };
    assert_eq!(script.atom_id(), "script-007");
    assert_eq!(script.content().scenario(), NOT_AVAILABLE);
    assert_eq!(script.content().cosmetology_connection(), NOT_AVAILABLE);
    assert_eq!(script.content().the_law(), NOT_AVAILABLE);
    assert_eq!(script.metadata().full_script(), "Line one.\nLine two.");
}

#[test]
fn test_block_defaults() {
    let block = assemble(&source(&[], vec![], false));
    assert_eq!(block.block_id(), "007");
    assert_eq!(block.block_title(), "Block 007");
    assert_eq!(block.lesson_title(), "Sanitation");
    assert_eq!(block.hour_name(), "Hour 1");
    assert_eq!(*block.duration_minutes(), 5);
    assert_eq!(block.tdlr_citation(), "§83.100");
}

#[test]
fn test_slides_pick_up_matching_prompts() {
    let prompts = parse_prompts("IMAGE 1 (0:00):\nFirst prompt\nIMAGE 2 (0:10):\nSecond prompt\n");
    let block = assemble(&source(&["slide_a.png", "slide_b.png"], prompts, false));

    let visuals = visuals(block.atoms());
    assert_eq!(visuals.len(), 2);
    assert_eq!(visuals[0].metadata().prompt(), "First prompt");
    assert_eq!(visuals[0].metadata().description(), "Timestamp: 0:00");
    assert_eq!(visuals[0].asset_id(), "block_007/slide_a.png");
    assert_eq!(visuals[1].metadata().prompt(), "Second prompt");
    assert_eq!(visuals[1].atom_id(), "vis-007-b");
}

#[test]
fn test_slide_without_prompt_gets_placeholder() {
    let prompts = parse_prompts("IMAGE 1 (0:00):\nFirst prompt\n");
    let block = assemble(&source(&["slide_c.png"], prompts, false));

    let visuals = visuals(block.atoms());
    assert_eq!(visuals[0].metadata().prompt(), "Shot C");
    assert_eq!(visuals[0].metadata().description(), "Slide C");
}

#[test]
fn test_visuals_are_sorted_and_deduplicated_by_letter() {
    let block = assemble(&source(
        &["slide_c.jpeg", "notes.txt", "slide_a.webp", "slide_a.png", "audio.wav"],
        vec![],
        false,
    ));

    let ids: Vec<_> = visuals(block.atoms())
        .into_iter()
        .map(|v| v.asset_id().as_str())
        .collect();
    assert_eq!(ids, ["block_007/slide_a.png", "block_007/slide_c.jpeg"]);
}

#[test]
fn test_audio_atom_links_to_script_and_comes_last() {
    let block = assemble(&source(&["slide_a.png"], vec![], true));
    let last = block.atoms().last().unwrap();

    let Atom::Audio(audio) = last else {
        panic!("expected audio atom last");
    };
    assert_eq!(audio.asset_id(), "block_007/audio.wav");
    assert_eq!(audio.metadata().linked_script_atom(), "script-007");
    assert!(block.atom("script-007").is_some());
}

#[test]
fn test_atom_ids_are_unique() {
    let prompts = parse_prompts("IMAGE 1:\na\nIMAGE 2:\nb\n");
    let block = assemble(&source(&["slide_a.png", "slide_b.jpg"], prompts, true));
    let mut ids: Vec<_> = block.atoms().iter().map(Atom::atom_id).collect();
    let before = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn test_sidecar_overrides_defaults() {
    let sidecar = Sidecar::default()
        .with_title("Disinfecting Implements")
        .with_citation("§83.102")
        .with_content(SidecarContent::new("A client arrives.", "Clean tools.", "Rule 83.102"));

    let source = BlockSourceBuilder::default()
        .block_id("010")
        .block_dir_name("block_010")
        .sidecar(sidecar)
        .build()
        .unwrap();
    let block = assemble(&source);

    assert_eq!(block.block_title(), "Disinfecting Implements");
    assert_eq!(block.tdlr_citation(), "§83.102");
    let Atom::Script(script) = &block.atoms()[0] else {
        panic!("expected script atom");
    };
    assert_eq!(script.content().scenario(), "A client arrives.");
    assert_eq!(script.content().the_law(), "Rule 83.102");
}

#[test]
fn test_partial_sidecar_content_defaults_missing_fields() {
    let sidecar = Sidecar::from_json(r#"{"content": {"law": "Rule 1"}}"#, "manifest.json").unwrap();
    let source = BlockSourceBuilder::default()
        .block_id("011")
        .block_dir_name("block_011")
        .sidecar(sidecar)
        .build()
        .unwrap();
    let block = assemble(&source);

    let Atom::Script(script) = &block.atoms()[0] else {
        panic!("expected script atom");
    };
    assert_eq!(script.content().scenario(), NOT_AVAILABLE);
    assert_eq!(script.content().the_law(), "Rule 1");
}

#[test]
fn test_assembly_is_deterministic() {
    let prompts = parse_prompts("IMAGE 2 (x):\nsecond\nIMAGE 1 (y):\nfirst\n");
    let src = source(&["slide_b.png", "slide_a.png"], prompts, true);

    let first = serde_json::to_string(&assemble(&src)).unwrap();
    let second = serde_json::to_string(&assemble(&src)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_serialized_shape_matches_wire_format() {
    let block = assemble(&source(&["slide_a.png"], vec![], true));
    let json = serde_json::to_value(&block).unwrap();

    assert_eq!(json["block_id"], "007");
    assert_eq!(json["duration_minutes"], 5);
    assert_eq!(json["atoms"][0]["atom_type"], "script");
    assert_eq!(json["atoms"][0]["content"]["SCENARIO"], "N/A");
    assert_eq!(json["atoms"][1]["atom_type"], "visual");
    assert_eq!(json["atoms"][1]["metadata"]["prompt"], "Shot A");
    assert_eq!(json["atoms"][2]["atom_type"], "audio");
}

#[test]
fn test_missing_block_id_fails_to_build() {
    let result = BlockSourceBuilder::default().block_dir_name("block_x").build();
    assert!(result.is_err());
}
