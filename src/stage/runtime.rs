use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::{
    animation::{transition::TransitionController, value::TransitionValue},
    foundation::config::TransitionOpts,
    foundation::core::{LayerId, Millis},
    model::{
        document::DocumentView,
        layer::{LayerKind, ReplicatorProps},
    },
    schedule::frame::{FrameHandle, FrameQueue},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// What one [`Stage::sync`] changed.
pub struct SyncReport {
    pub mounted: Vec<LayerId>,
    pub unmounted: Vec<LayerId>,
    /// Layers whose active-state change started (or restarted) a transition.
    pub started: Vec<LayerId>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Per-layer output handed to the renderer.
pub struct RenderedLayer {
    pub id: LayerId,
    pub kind: LayerKind,
    pub value: TransitionValue,
    pub transitioning: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicator: Option<ReplicatorProps>,
}

/// All transition controllers of one canvas view, sharing one frame queue.
///
/// The host calls [`Stage::sync`] whenever the document changes and [`Stage::tick`] once per
/// display frame.
#[derive(Debug, Default)]
pub struct Stage {
    queue: FrameQueue,
    opts: TransitionOpts,
    controllers: BTreeMap<LayerId, TransitionController<FrameQueue>>,
}

impl Stage {
    /// Empty stage using `opts` for every controller.
    pub fn new(opts: TransitionOpts) -> Self {
        Self {
            queue: FrameQueue::new(),
            opts,
            controllers: BTreeMap::new(),
        }
    }

    /// Frame queue shared by all controllers.
    pub fn queue(&self) -> &FrameQueue {
        &self.queue
    }

    /// Transition options applied to mounted layers.
    pub fn opts(&self) -> &TransitionOpts {
        &self.opts
    }

    /// Reconcile controllers with `doc`: unmount layers that left, feed the rest, mount new ones.
    #[tracing::instrument(skip(self, doc), fields(state = doc.active_state()))]
    pub fn sync(&mut self, doc: &impl DocumentView, now: Millis) -> SyncReport {
        let mut report = SyncReport::default();
        let state = doc.active_state();

        let gone: Vec<LayerId> = self
            .controllers
            .keys()
            .filter(|id| doc.layer(id).is_none())
            .cloned()
            .collect();
        for id in gone {
            if let Some(ctrl) = self.controllers.remove(&id) {
                ctrl.teardown();
            }
            report.unmounted.push(id);
        }

        for layer in doc.layers() {
            match self.controllers.get_mut(&layer.id) {
                Some(ctrl) => {
                    let before = ctrl.pending_frame();
                    ctrl.observe(&layer.props, state, now);
                    if ctrl.is_transitioning() && ctrl.pending_frame() != before {
                        report.started.push(layer.id.clone());
                    }
                }
                None => {
                    let ctrl = TransitionController::new(
                        layer.id.clone(),
                        &layer.props,
                        state,
                        self.opts,
                        self.queue.clone(),
                    );
                    self.controllers.insert(layer.id.clone(), ctrl);
                    report.mounted.push(layer.id.clone());
                }
            }
        }

        if !report.mounted.is_empty() || !report.unmounted.is_empty() {
            debug!(
                mounted = report.mounted.len(),
                unmounted = report.unmounted.len(),
                "stage membership changed"
            );
        }
        report
    }

    /// Dispatch every due frame at host time `now`. Returns how many controllers advanced.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, now: Millis) -> usize {
        let due = self.queue.take_due();
        if due.is_empty() {
            return 0;
        }

        let owners: HashMap<FrameHandle, LayerId> = self
            .controllers
            .iter()
            .filter_map(|(id, c)| c.pending_frame().map(|h| (h, id.clone())))
            .collect();

        let mut advanced = 0;
        for handle in due {
            let Some(id) = owners.get(&handle) else {
                continue;
            };
            if let Some(ctrl) = self.controllers.get_mut(id) {
                if ctrl.on_frame(handle, now) {
                    advanced += 1;
                }
            }
        }
        advanced
    }

    /// Current value of one layer.
    pub fn value(&self, id: &LayerId) -> Option<&TransitionValue> {
        self.controllers.get(id).map(|c| c.value())
    }

    /// Controller of one layer.
    pub fn controller(&self, id: &LayerId) -> Option<&TransitionController<FrameQueue>> {
        self.controllers.get(id)
    }

    /// Render list in document order. Layers the stage has not mounted yet are skipped.
    pub fn render(&self, doc: &impl DocumentView) -> Vec<RenderedLayer> {
        doc.layers()
            .iter()
            .filter_map(|layer| {
                let ctrl = self.controllers.get(&layer.id)?;
                Some(RenderedLayer {
                    id: layer.id.clone(),
                    kind: layer.kind,
                    value: *ctrl.value(),
                    transitioning: ctrl.is_transitioning(),
                    replicator: layer.replicator_transform(),
                })
            })
            .collect()
    }

    /// Whether any layer is mid-transition.
    pub fn is_animating(&self) -> bool {
        self.controllers.values().any(|c| c.is_transitioning())
    }

    /// Number of mounted layers.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether no layer is mounted.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Whether `id` is mounted.
    pub fn contains(&self, id: &LayerId) -> bool {
        self.controllers.contains_key(id)
    }

    /// Unmount everything, cancelling all pending frames.
    pub fn clear(&mut self) {
        for (_, ctrl) in std::mem::take(&mut self.controllers) {
            ctrl.teardown();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/runtime.rs"]
mod tests;
