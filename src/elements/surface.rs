// Render Surface
// Template inflation and the "animate next layout change" primitive
//
// Usage:
//   let mut surface = TerminalSurface::default();
//   let view = surface.inflate_tab_view();
//   surface.begin_delayed_transition(&view);
//   // Later, while drawing...
//   let width = surface.animated_width(view.id(), target, Instant::now());

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::core::{CompositeView, ViewId};

/// Default duration of a layout transition
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(250);

/// What the badged strip needs from the layer that draws it
pub trait RenderSurface {
    /// Fresh three-slot view (title, icon, badge) with a new identity
    fn inflate_tab_view(&mut self) -> CompositeView;

    /// Interpolate the next layout change of `view` instead of jumping to it.
    /// Fire and forget: the transition runs on later frames.
    fn begin_delayed_transition(&mut self, view: &CompositeView);
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: u16,
    started: Instant,
}

/// Per-view width transitions, advanced by the frames that draw them
#[derive(Debug, Clone)]
pub struct LayoutTransitions {
    duration: Duration,
    /// Width each view had on its last frame
    last_widths: HashMap<ViewId, u16>,
    /// Requested, waiting for the next frame to pick up the start width
    pending: HashSet<ViewId>,
    active: HashMap<ViewId, Transition>,
}

impl LayoutTransitions {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            last_widths: HashMap::new(),
            pending: HashSet::new(),
            active: HashMap::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Mark `id` so its next width change is animated
    pub fn request(&mut self, id: ViewId) {
        self.pending.insert(id);
    }

    /// True while a transition is requested or running for `id`
    pub fn is_animating(&self, id: ViewId) -> bool {
        self.pending.contains(&id) || self.active.contains_key(&id)
    }

    /// True while any view has a transition requested or running
    pub fn has_active(&self) -> bool {
        !self.pending.is_empty() || !self.active.is_empty()
    }

    /// Width to draw for `id` this frame, moving toward `target`
    pub fn width(&mut self, id: ViewId, target: u16, now: Instant) -> u16 {
        if self.pending.remove(&id) {
            if let Some(&from) = self.last_widths.get(&id) {
                if from != target {
                    self.active.insert(id, Transition { from, started: now });
                }
            }
        }

        let width = match self.active.get(&id).copied() {
            Some(transition) => {
                let elapsed = now.saturating_duration_since(transition.started);
                if self.duration.is_zero() || elapsed >= self.duration {
                    self.active.remove(&id);
                    target
                } else {
                    let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
                    interpolate(transition.from, target, progress)
                }
            }
            None => target,
        };

        self.last_widths.insert(id, width);
        width
    }

    /// Forget requests that the last frame did not pick up (hidden titles)
    pub fn settle(&mut self) {
        self.pending.clear();
    }

    /// Drop any state kept for views that no longer exist
    pub fn retain(&mut self, live: &HashSet<ViewId>) {
        self.last_widths.retain(|id, _| live.contains(id));
        self.pending.retain(|id| live.contains(id));
        self.active.retain(|id, _| live.contains(id));
    }
}

impl Default for LayoutTransitions {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION)
    }
}

fn interpolate(from: u16, to: u16, progress: f32) -> u16 {
    let progress = progress.clamp(0.0, 1.0);
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * progress;
    value.round() as u16
}

/// Terminal render surface used by the ratatui renderer
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    next_id: u64,
    transitions: LayoutTransitions,
}

impl TerminalSurface {
    pub fn new(transition: Duration) -> Self {
        Self {
            next_id: 0,
            transitions: LayoutTransitions::new(transition),
        }
    }

    pub fn transitions(&self) -> &LayoutTransitions {
        &self.transitions
    }

    pub fn transitions_mut(&mut self) -> &mut LayoutTransitions {
        &mut self.transitions
    }

    /// Title width to draw for `id` this frame
    pub fn animated_width(&mut self, id: ViewId, target: u16, now: Instant) -> u16 {
        self.transitions.width(id, target, now)
    }
}

impl RenderSurface for TerminalSurface {
    fn inflate_tab_view(&mut self) -> CompositeView {
        self.next_id += 1;
        CompositeView::template(ViewId::new(self.next_id))
    }

    fn begin_delayed_transition(&mut self, view: &CompositeView) {
        self.transitions.request(view.id());
    }
}
