#![allow(clippy::float_cmp)]

use super::*;

fn block_at(col_start: u32, col_span: u32, row_start: u32, row_span: u32) -> Block {
    Block::new("text", Layout::new(col_start, col_span, row_start, row_span), "")
}

// =============================================================
// Block
// =============================================================

#[test]
fn new_block_has_default_style_and_fresh_id() {
    let a = block_at(1, 6, 1, 6);
    let b = block_at(1, 6, 1, 6);
    assert_ne!(a.id, b.id);
    assert_eq!(a.style, BlockStyle::default());
    assert_eq!(a.kind, "text");
}

#[test]
fn block_serde_round_trip() {
    let mut block = Block::new("image", Layout::new(3, 4, 5, 6), "hello");
    block.style.text_align = Some(TextAlign::Center);
    let json = serde_json::to_string(&block).unwrap();
    let back: Block = serde_json::from_str(&json).unwrap();
    assert_eq!(back, block);
}

#[test]
fn block_serializes_layout_fields() {
    let block = Block::new("text", Layout::new(3, 4, 5, 6), "");
    let value = serde_json::to_value(&block).unwrap();
    assert_eq!(value["layout"]["col_start"], 3);
    assert_eq!(value["layout"]["col_span"], 4);
    assert_eq!(value["layout"]["row_start"], 5);
    assert_eq!(value["layout"]["row_span"], 6);
    assert_eq!(value["content"]["value"], "");
}

// =============================================================
// BlockStyle
// =============================================================

#[test]
fn default_style_matches_new_block_defaults() {
    let style = BlockStyle::default();
    assert_eq!(style.background_color, "#ffffff");
    assert_eq!(style.border.width, 1.0);
    assert_eq!(style.border.color, "#dddddd");
    assert_eq!(style.border.radius, 4.0);
    assert_eq!(style.shadow, "none");
    assert_eq!(style.opacity, 1.0);
    assert!(style.font_family.is_none());
}

#[test]
fn default_style_omits_unset_typography() {
    let value = serde_json::to_value(BlockStyle::default()).unwrap();
    assert!(value.get("font_size").is_none());
    assert!(value.get("text_align").is_none());
}

#[test]
fn canvas_style_has_no_border() {
    let style = BlockStyle::canvas();
    assert_eq!(style.border.width, 0.0);
    assert_eq!(style.border.radius, 0.0);
}

#[test]
fn apply_patch_only_touches_present_fields() {
    let mut style = BlockStyle::default();
    style.apply(&StylePatch {
        background_color: Some("#000000".into()),
        border_radius: Some(12.0),
        font_size: Some(18.0),
        ..Default::default()
    });
    assert_eq!(style.background_color, "#000000");
    assert_eq!(style.border.radius, 12.0);
    assert_eq!(style.border.width, 1.0);
    assert_eq!(style.font_size, Some(18.0));
    assert_eq!(style.shadow, "none");
}

#[test]
fn apply_patch_clamps_opacity() {
    let mut style = BlockStyle::default();
    style.apply(&StylePatch { opacity: Some(3.0), ..Default::default() });
    assert_eq!(style.opacity, 1.0);
    style.apply(&StylePatch { opacity: Some(-1.0), ..Default::default() });
    assert_eq!(style.opacity, 0.0);
}

#[test]
fn empty_patch_is_identity() {
    let mut style = BlockStyle::default();
    style.apply(&StylePatch::default());
    assert_eq!(style, BlockStyle::default());
}

#[test]
fn style_patch_deserializes_sparse_json() {
    let patch: StylePatch = serde_json::from_str(r##"{"text_align":"right","color":"#333"}"##).unwrap();
    assert_eq!(patch.text_align, Some(TextAlign::Right));
    assert_eq!(patch.color.as_deref(), Some("#333"));
    assert!(patch.background_color.is_none());
}

// =============================================================
// BlockStore
// =============================================================

#[test]
fn store_keeps_insertion_order() {
    let mut store = BlockStore::new();
    let a = block_at(1, 1, 1, 1);
    let b = block_at(3, 1, 1, 1);
    let (a_id, b_id) = (a.id, b.id);
    store.push(a);
    store.push(b);
    let ids: Vec<BlockId> = store.as_slice().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![a_id, b_id]);
    assert_eq!(store.position(&b_id), Some(1));
}

#[test]
fn store_remove_returns_block_and_preserves_order() {
    let mut store = BlockStore::new();
    let blocks: Vec<Block> = (1..=3).map(|c| block_at(c * 2, 1, 1, 1)).collect();
    let ids: Vec<BlockId> = blocks.iter().map(|b| b.id).collect();
    for b in blocks {
        store.push(b);
    }
    let removed = store.remove(&ids[1]).unwrap();
    assert_eq!(removed.id, ids[1]);
    let remaining: Vec<BlockId> = store.as_slice().iter().map(|b| b.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[2]]);
    assert!(store.remove(&ids[1]).is_none());
}

#[test]
fn store_swap_ignores_out_of_range() {
    let mut store = BlockStore::new();
    let a = block_at(1, 1, 1, 1);
    let a_id = a.id;
    store.push(a);
    store.swap(0, 5);
    assert_eq!(store.position(&a_id), Some(0));
}

#[test]
fn store_collides_skips_self() {
    let mut store = BlockStore::new();
    let a = block_at(1, 6, 1, 6);
    let b = block_at(7, 6, 1, 6);
    let (a_id, b_id) = (a.id, b.id);
    store.push(a);
    store.push(b);

    assert!(!store.collides(&a_id, &Layout::new(1, 6, 1, 6)));
    assert!(store.collides(&a_id, &Layout::new(2, 6, 1, 6)));
    assert!(store.collides(&b_id, &Layout::new(6, 6, 1, 6)));
}

#[test]
fn store_layouts_and_len() {
    let mut store = BlockStore::new();
    assert!(store.is_empty());
    store.push(block_at(1, 2, 3, 4));
    assert_eq!(store.len(), 1);
    assert_eq!(store.layouts(), vec![Layout::new(1, 2, 3, 4)]);
    assert_eq!(store.as_slice().len(), 1);
}
