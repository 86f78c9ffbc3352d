//! Human-readable directions for a single edge traversal.

use crate::model::{Node, NodeKind};

/// Describe walking from `from` to `to`.
///
/// Crossing floors yields a lift or stairs instruction depending on the
/// target node's type; staying on a floor yields a "Move from" instruction
/// using display names.
pub fn instruction_for(from: &Node, to: &Node) -> String {
    if from.floor != to.floor {
        return vertical_instruction(to.kind, from.floor, to.floor);
    }
    format!("Move from {} to {}", from.name, to.name)
}

/// Instruction for moving between two floors using a stair or lift.
pub fn vertical_instruction(kind: NodeKind, from_floor: i32, to_floor: i32) -> String {
    match kind {
        NodeKind::Lift => format!("Take lift from floor {from_floor} to floor {to_floor}"),
        _ => format!("Use stairs from floor {from_floor} to floor {to_floor}"),
    }
}
