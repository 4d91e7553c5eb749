//! Compatibility checks between selected components

use tracing::debug;

use crate::domain::entities::ComponentCategory;
use crate::domain::value_objects::CompatibilityIssue;

use super::power::{estimate_power_draw, PsuTier};
use super::selection::SelectedComponent;

/// Check a selection for parts that do not fit together.
///
/// Findings come out in a fixed order: duplicated single-slot parts, socket,
/// memory type, then power supply.
pub fn check_compatibility(selection: &[SelectedComponent]) -> Vec<CompatibilityIssue> {
    let mut issues = Vec::new();

    check_single_slots(selection, &mut issues);
    check_socket(selection, &mut issues);
    check_memory_type(selection, &mut issues);
    check_power_supply(selection, &mut issues);

    debug!(
        components = selection.len(),
        issues = issues.len(),
        "Compatibility check finished"
    );
    issues
}

fn first_of(selection: &[SelectedComponent], category: ComponentCategory) -> Option<&SelectedComponent> {
    selection.iter().find(|selected| selected.category() == category)
}

fn check_single_slots(selection: &[SelectedComponent], issues: &mut Vec<CompatibilityIssue>) {
    for category in ComponentCategory::ALL.into_iter().filter(|c| c.is_single_slot()) {
        let units: u32 = selection
            .iter()
            .filter(|selected| selected.category() == category)
            .map(|selected| selected.quantity)
            .sum();
        if units > 1 {
            issues.push(CompatibilityIssue::error(
                format!("multiple_{}", category),
                format!("A build can only contain one {}, {} selected", category, units),
            ));
        }
    }
}

fn check_socket(selection: &[SelectedComponent], issues: &mut Vec<CompatibilityIssue>) {
    let (Some(cpu), Some(board)) = (
        first_of(selection, ComponentCategory::Cpu),
        first_of(selection, ComponentCategory::Motherboard),
    ) else {
        return;
    };

    if let (Some(cpu_socket), Some(board_socket)) = (cpu.spec("socket"), board.spec("socket")) {
        if !cpu_socket.trim().eq_ignore_ascii_case(board_socket.trim()) {
            issues.push(CompatibilityIssue::error(
                "socket_mismatch",
                format!(
                    "{} uses socket {} but {} has socket {}",
                    cpu.component.name, cpu_socket, board.component.name, board_socket
                ),
            ));
        }
    }
}

fn check_memory_type(selection: &[SelectedComponent], issues: &mut Vec<CompatibilityIssue>) {
    let Some(board_type) = first_of(selection, ComponentCategory::Motherboard)
        .and_then(|board| board.spec("memory_type"))
    else {
        return;
    };

    for memory in selection
        .iter()
        .filter(|selected| selected.category() == ComponentCategory::Memory)
    {
        if let Some(memory_type) = memory.spec("memory_type") {
            if !memory_type.trim().eq_ignore_ascii_case(board_type.trim()) {
                issues.push(CompatibilityIssue::error(
                    "memory_type_mismatch",
                    format!(
                        "{} is {} but the motherboard supports {}",
                        memory.component.name, memory_type, board_type
                    ),
                ));
            }
        }
    }
}

fn check_power_supply(selection: &[SelectedComponent], issues: &mut Vec<CompatibilityIssue>) {
    let draw = estimate_power_draw(selection);
    let Some(psu) = first_of(selection, ComponentCategory::PowerSupply) else {
        if draw > 0 {
            issues.push(CompatibilityIssue::warning(
                "missing_power_supply",
                format!("No power supply selected for an estimated {}W load", draw),
            ));
        }
        return;
    };

    let Some(output) = psu.rated_output() else {
        return;
    };

    if output < draw {
        issues.push(CompatibilityIssue::error(
            "psu_insufficient",
            format!(
                "{} delivers {}W but the build draws an estimated {}W",
                psu.component.name, output, draw
            ),
        ));
    } else if let Some(recommended) = PsuTier::for_load(f64::from(draw)).rated_watts() {
        if output < recommended {
            issues.push(CompatibilityIssue::warning(
                "psu_below_recommendation",
                format!(
                    "{} delivers {}W, {}W or more is recommended",
                    psu.component.name, output, recommended
                ),
            ));
        }
    }
}
