use serde_json::json;
use uuid::Uuid;

use super::*;

#[test]
fn add_block_from_json() {
    let command: Command = serde_json::from_value(json!({
        "command": "add_block",
        "kind": "text",
        "span": { "col_span": 6, "row_span": 6 }
    }))
    .unwrap();
    assert_eq!(
        command,
        Command::AddBlock { kind: "text".into(), span: Span::new(6, 6).unwrap(), content: String::new() }
    );
}

#[test]
fn zero_span_rejected_at_deserialization() {
    let result = serde_json::from_value::<Command>(json!({
        "command": "add_block",
        "kind": "text",
        "span": { "col_span": 0, "row_span": 2 }
    }));
    assert!(result.is_err());
}

#[test]
fn move_accepts_out_of_range_proposals() {
    let id = Uuid::new_v4();
    let command: Command = serde_json::from_value(json!({
        "command": "move_block",
        "id": id,
        "col_start": -4,
        "row_start": 9000
    }))
    .unwrap();
    assert_eq!(command, Command::MoveBlock { id, col_start: -4, row_start: 9000 });
}

#[test]
fn resize_direction_is_kebab_case() {
    let id = Uuid::new_v4();
    let value = serde_json::to_value(Command::resize(id, ResizeDirection::TopLeft, GridDelta::new(-1, 2))).unwrap();
    assert_eq!(value["command"], "resize_block");
    assert_eq!(value["direction"], "top-left");
    assert_eq!(value["col_change"], -1);
    assert_eq!(value["row_change"], 2);
}

#[test]
fn select_nests_selection_tag() {
    let id = Uuid::new_v4();
    let command: Command = serde_json::from_value(json!({
        "command": "select",
        "target": { "type": "block", "id": id }
    }))
    .unwrap();
    assert_eq!(command, Command::Select { target: Selection::Block { id } });

    let canvas: Command = serde_json::from_value(json!({
        "command": "select",
        "target": { "type": "canvas" }
    }))
    .unwrap();
    assert_eq!(canvas.block_id(), None);
}

#[test]
fn set_style_with_sparse_patch() {
    let id = Uuid::new_v4();
    let command: Command = serde_json::from_value(json!({
        "command": "set_style",
        "id": id,
        "patch": { "opacity": 0.5 }
    }))
    .unwrap();
    let Command::SetStyle { patch, .. } = command else {
        panic!("expected set_style");
    };
    assert_eq!(patch.opacity, Some(0.5));
    assert_eq!(patch.background_color, None);
}

#[test]
fn unknown_command_rejected() {
    let result = serde_json::from_value::<Command>(json!({ "command": "explode" }));
    assert!(result.is_err());
}

#[test]
fn block_id_per_variant() {
    let id = Uuid::new_v4();
    assert_eq!(Command::RemoveBlock { id }.block_id(), Some(id));
    assert_eq!(Command::ReorderBlock { id, direction: ReorderDirection::Up }.block_id(), Some(id));
    assert_eq!(Command::Select { target: Selection::Block { id } }.block_id(), Some(id));
    assert_eq!(Command::SetCanvasStyle { patch: StylePatch::default() }.block_id(), None);
    let add = Command::AddBlock { kind: "image".into(), span: Span::new(1, 1).unwrap(), content: String::new() };
    assert_eq!(add.block_id(), None);
}

#[test]
fn name_matches_wire_tag() {
    let id = Uuid::new_v4();
    let commands = [
        Command::RemoveBlock { id },
        Command::MoveBlock { id, col_start: 1, row_start: 1 },
        Command::resize(id, ResizeDirection::Right, GridDelta::new(1, 0)),
        Command::Select { target: Selection::None },
        Command::SetContent { id, value: "hi".into() },
        Command::SetStyle { id, patch: StylePatch::default() },
        Command::SetCanvasStyle { patch: StylePatch::default() },
        Command::SetLayout { id, layout: Layout::new(1, 2, 1, 2) },
        Command::ReorderBlock { id, direction: ReorderDirection::Down },
    ];
    for command in commands {
        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["command"], command.name());
    }
}

#[test]
fn layout_change_converts_to_applied() {
    let layout = Layout::new(2, 3, 4, 5);
    assert_eq!(Applied::from(LayoutChange::Resized { layout }), Applied::Resized { layout });
    assert_eq!(Applied::from(LayoutChange::Unchanged), Applied::Unchanged);
}

#[test]
fn applied_outcome_tag() {
    let value = serde_json::to_value(Applied::Reordered { swapped: false }).unwrap();
    assert_eq!(value, json!({ "outcome": "reordered", "swapped": false }));
    let value = serde_json::to_value(Applied::Unchanged).unwrap();
    assert_eq!(value, json!({ "outcome": "unchanged" }));
}
