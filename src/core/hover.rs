//! Edge-triggered hover highlighting.

use super::config::HighlightTuning;
use super::host::SceneHost;
use super::scene::SceneRegistry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(usize),
}

/// What changed during one update. Both fields are `None` while hover is stable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTransition {
    pub cleared: Option<usize>,
    pub applied: Option<usize>,
}

impl HoverTransition {
    pub fn is_empty(&self) -> bool {
        self.cleared.is_none() && self.applied.is_none()
    }
}

#[derive(Debug, Default)]
pub struct HoverMachine {
    state: HoverState,
}

impl HoverMachine {
    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn hovered(&self) -> Option<usize> {
        match self.state {
            HoverState::Hovering(i) => Some(i),
            HoverState::Idle => None,
        }
    }

    /// Feed this frame's pick result.
    pub fn update(
        &mut self,
        hit: Option<usize>,
        registry: &mut SceneRegistry,
        tuning: &HighlightTuning,
        host: &mut dyn SceneHost,
    ) -> HoverTransition {
        let previous = self.hovered();
        if previous == hit {
            return HoverTransition::default();
        }

        let mut transition = HoverTransition::default();
        if let Some(old) = previous {
            if let Some(w) = registry.waypoint_mut(old) {
                w.clear_highlight();
            }
            transition.cleared = Some(old);
        }
        if let Some(new) = hit {
            if let Some(w) = registry.waypoint_mut(new) {
                w.apply_highlight(tuning);
            }
            transition.applied = Some(new);
        }

        match (previous, hit) {
            (None, Some(_)) => host.set_pointer_actionable(true),
            (Some(_), None) => host.set_pointer_actionable(false),
            _ => {}
        }

        self.state = match hit {
            Some(i) => HoverState::Hovering(i),
            None => HoverState::Idle,
        };
        transition
    }
}
