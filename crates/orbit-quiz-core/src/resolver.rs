//! Decides what a finished drag means: a correct placement, a miss, or nothing.

use crate::catalog::BodyId;
use crate::config::{DisplacementPolicy, QuizConfig};
use crate::scene::{ScreenAnchor, ScreenAnchors};
use crate::state::GameState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropOutcome {
    /// Aborted drag, marker not tracked, or session already complete.
    Ignored,
    /// No anchor within snap distance, or the nearest anchor is another body.
    Incorrect,
    /// Dropped on its own body but it was already locked.
    AlreadyLocked,
    Locked {
        anchor: ScreenAnchor,
        /// Unlocked label moved off the anchor that was just claimed.
        displaced: Option<BodyId>,
        /// Every label is now locked.
        all_matched: bool,
    },
}

/// Resolves the drop of `label` at `drop` against this frame's anchors.
pub fn resolve_drop(
    state: &mut GameState,
    label: BodyId,
    drop: Option<Vec2>,
    anchors: &ScreenAnchors,
    config: &QuizConfig,
) -> DropOutcome {
    let Some(point) = drop else {
        return DropOutcome::Ignored;
    };
    if !state.marker_visible || state.completed {
        return DropOutcome::Ignored;
    }

    let nearest = match anchors.nearest_visible(point) {
        Some((anchor, distance)) if distance <= config.snap_distance => anchor,
        _ => {
            log::debug!("[match] {} dropped away from every anchor", label.0);
            return DropOutcome::Incorrect;
        }
    };
    if nearest.id != label {
        log::debug!("[match] {} dropped on {}", label.0, nearest.id.0);
        return DropOutcome::Incorrect;
    }

    let Some(target) = state.find_label_mut(label) else {
        log::warn!("[match] unknown label {}", label.0);
        return DropOutcome::Ignored;
    };
    if target.locked {
        return DropOutcome::AlreadyLocked;
    }
    let vacated = target.display_anchor;
    target.locked = true;
    target.display_anchor = label;
    state.correct_count += 1;

    let displaced = state
        .labels
        .iter_mut()
        .find(|l| l.id != label && !l.locked && !l.dragging && l.display_anchor == label)
        .map(|l| {
            if config.displacement == DisplacementPolicy::SwapToVacated {
                l.display_anchor = vacated;
            }
            l.id
        });

    let all_matched = state.correct_count == state.total_count;
    log::info!(
        "[match] locked {} ({}/{})",
        label.0,
        state.correct_count,
        state.total_count
    );
    DropOutcome::Locked {
        anchor: nearest,
        displaced,
        all_matched,
    }
}
