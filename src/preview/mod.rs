//! Debounced render pipeline.
//!
//! [`RenderPipeline`] is the pure state machine: it decides *when* a render request goes out and
//! *what* happens to the preview when a response comes back. [`PreviewController`] owns the
//! browser side (timers, `spawn_local`, DOM) and feeds events into it.
//!
//! ```text
//! Idle --edit--> Pending --edit--> Pending (generation bumped)
//! Pending --timer(gen)--> Rendering --response--> Idle
//! ```

mod controller;

pub use controller::{highlight_code_blocks, notify_rendered, PreviewController, PREVIEW_EVENT};

use crate::api::ApiError;

pub const EMPTY_PREVIEW_HTML: &str = "<p>Nothing to preview</p>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMode {
    /// Every edit arms the debounce.
    Living,
    /// Render only when the preview tab is activated.
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Pending { generation: u64 },
    Rendering { request_id: u64 },
}

/// Snapshot of the document submitted for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    pub id: u64,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewUpdate {
    Html(String),
    /// The server rendered nothing; show [`EMPTY_PREVIEW_HTML`].
    Empty,
    /// Keep whatever the preview currently shows.
    Unchanged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseOutcome {
    pub update: PreviewUpdate,
    /// Follow-up request for edits that arrived while the previous one was in flight.
    pub next: Option<RenderRequest>,
}

#[derive(Clone, Debug)]
pub struct RenderPipeline {
    mode: TriggerMode,
    content: String,
    generation: u64,
    armed: Option<u64>,
    in_flight: Option<RenderRequest>,
    deferred: bool,
    next_request_id: u64,
}

impl RenderPipeline {
    pub fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            content: String::new(),
            generation: 0,
            armed: None,
            in_flight: None,
            deferred: false,
            next_request_id: 0,
        }
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    pub fn state(&self) -> PipelineState {
        if let Some(generation) = self.armed {
            PipelineState::Pending { generation }
        } else if let Some(req) = &self.in_flight {
            PipelineState::Rendering { request_id: req.id }
        } else {
            PipelineState::Idle
        }
    }

    /// The preview no longer reflects the document it will show next.
    pub fn is_stale(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Record an edit. In living mode returns the generation the caller must arm a timer for;
    /// any previously armed generation is dead from here on.
    pub fn on_edit(&mut self, content: &str) -> Option<u64> {
        self.content.clear();
        self.content.push_str(content);

        match self.mode {
            TriggerMode::Manual => None,
            TriggerMode::Living => {
                self.generation += 1;
                self.armed = Some(self.generation);
                Some(self.generation)
            }
        }
    }

    /// Debounce timer fired. Cancelled generations are ignored.
    pub fn on_timer(&mut self, generation: u64) -> Option<RenderRequest> {
        if self.armed != Some(generation) {
            return None;
        }
        self.armed = None;
        self.request_current()
    }

    /// Preview tab became visible.
    pub fn on_preview_activated(&mut self, content: &str) -> Option<RenderRequest> {
        self.content.clear();
        self.content.push_str(content);
        self.request_current()
    }

    /// First render after mounting, regardless of mode.
    pub fn on_init(&mut self, content: &str) -> Option<RenderRequest> {
        self.on_preview_activated(content)
    }

    pub fn on_response(
        &mut self,
        request_id: u64,
        result: Result<String, ApiError>,
    ) -> ResponseOutcome {
        let current = self.in_flight.as_ref().map(|r| r.id);
        if current != Some(request_id) {
            log::debug!("dropping preview response {request_id}, expecting {current:?}");
            return ResponseOutcome {
                update: PreviewUpdate::Unchanged,
                next: None,
            };
        }
        self.in_flight = None;

        let update = match result {
            Ok(html) if html.trim().is_empty() => PreviewUpdate::Empty,
            Ok(html) => PreviewUpdate::Html(html),
            Err(e) => {
                log::warn!("preview render failed: {e}");
                PreviewUpdate::Unchanged
            }
        };

        let next = if std::mem::take(&mut self.deferred) && self.armed.is_none() {
            self.request_current()
        } else {
            None
        };

        ResponseOutcome { update, next }
    }

    /// Issue a request for the current content, or defer it until the outstanding one returns.
    fn request_current(&mut self) -> Option<RenderRequest> {
        if let Some(req) = &self.in_flight {
            if req.content != self.content {
                self.deferred = true;
            }
            return None;
        }

        self.next_request_id += 1;
        let req = RenderRequest {
            id: self.next_request_id,
            content: self.content.clone(),
        };
        self.in_flight = Some(req.clone());
        Some(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::ManualScheduler;
    use crate::timer::Debounce;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn err() -> ApiError {
        ApiError {
            kind: crate::api::ApiErrorKind::Network,
            message: "offline".to_string(),
        }
    }

    /// Pipeline wired to a virtual clock; records `(time, request)` for every issued request.
    struct Harness {
        sched: ManualScheduler,
        debounce: Debounce<ManualScheduler>,
        pipeline: Rc<RefCell<RenderPipeline>>,
        sent: Rc<RefCell<Vec<(u64, RenderRequest)>>>,
    }

    impl Harness {
        fn new(delay_ms: i32) -> Self {
            let sched = ManualScheduler::default();
            Self {
                debounce: Debounce::new(sched.clone(), delay_ms),
                sched,
                pipeline: Rc::new(RefCell::new(RenderPipeline::new(TriggerMode::Living))),
                sent: Rc::default(),
            }
        }

        fn edit_at(&self, t: u64, content: &str) {
            self.sched.advance_to(t);
            let Some(gen) = self.pipeline.borrow_mut().on_edit(content) else {
                return;
            };
            let pipeline = self.pipeline.clone();
            let sent = self.sent.clone();
            let clock = self.sched.clone();
            self.debounce.schedule(move || {
                let req = pipeline.borrow_mut().on_timer(gen);
                if let Some(req) = req {
                    sent.borrow_mut().push((clock.now(), req));
                }
            });
        }
    }

    #[test]
    fn test_burst_of_edits_renders_once_with_last_content() {
        let h = Harness::new(400);
        h.edit_at(0, "a");
        h.edit_at(100, "ab");
        h.edit_at(200, "abc");
        h.sched.advance_to(2000);

        let sent = h.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, 600);
        assert_eq!(sent[0].1.content, "abc");
    }

    #[test]
    fn test_stale_generation_is_ignored_even_if_timer_fires() {
        let mut p = RenderPipeline::new(TriggerMode::Living);
        let first = p.on_edit("a").expect("living mode arms");
        let second = p.on_edit("ab").expect("living mode arms");
        assert!(p.on_timer(first).is_none());
        let req = p.on_timer(second).expect("latest generation renders");
        assert_eq!(req.content, "ab");
        assert!(p.on_timer(second).is_none());
    }

    #[test]
    fn test_state_transitions() {
        let mut p = RenderPipeline::new(TriggerMode::Living);
        assert_eq!(p.state(), PipelineState::Idle);
        let gen = p.on_edit("x").expect("armed");
        assert_eq!(p.state(), PipelineState::Pending { generation: gen });
        let req = p.on_timer(gen).expect("request");
        assert_eq!(p.state(), PipelineState::Rendering { request_id: req.id });
        assert!(p.is_stale());
        let out = p.on_response(req.id, Ok("<p>x</p>".to_string()));
        assert_eq!(out.update, PreviewUpdate::Html("<p>x</p>".to_string()));
        assert_eq!(p.state(), PipelineState::Idle);
        assert!(!p.is_stale());
    }

    #[test]
    fn test_manual_mode_ignores_edits_and_renders_on_activation() {
        let mut p = RenderPipeline::new(TriggerMode::Manual);
        assert!(p.on_edit("draft").is_none());
        assert_eq!(p.state(), PipelineState::Idle);
        let req = p.on_preview_activated("draft").expect("activation renders");
        assert_eq!(req.content, "draft");
        // Clicking the tab again while the same content is rendering issues nothing.
        assert!(p.on_preview_activated("draft").is_none());
    }

    #[test]
    fn test_empty_response_shows_placeholder() {
        let mut p = RenderPipeline::new(TriggerMode::Manual);
        let req = p.on_init("").expect("init renders");
        let out = p.on_response(req.id, Ok("  \n".to_string()));
        assert_eq!(out.update, PreviewUpdate::Empty);
    }

    #[test]
    fn test_failure_leaves_preview_unchanged_without_retry() {
        let mut p = RenderPipeline::new(TriggerMode::Living);
        let gen = p.on_edit("x").expect("armed");
        let req = p.on_timer(gen).expect("request");
        let out = p.on_response(req.id, Err(err()));
        assert_eq!(out.update, PreviewUpdate::Unchanged);
        assert!(out.next.is_none());
        assert_eq!(p.state(), PipelineState::Idle);
    }

    #[test]
    fn test_edit_during_flight_is_rendered_after_response() {
        let mut p = RenderPipeline::new(TriggerMode::Living);
        let gen = p.on_edit("v1").expect("armed");
        let first = p.on_timer(gen).expect("first request");

        let gen = p.on_edit("v2").expect("armed");
        assert!(p.on_timer(gen).is_none(), "serialized behind the first request");

        let out = p.on_response(first.id, Ok("<p>v1</p>".to_string()));
        let next = out.next.expect("deferred follow-up");
        assert_eq!(next.content, "v2");
        assert!(next.id > first.id);
    }

    #[test]
    fn test_follow_up_waits_for_armed_timer() {
        let mut p = RenderPipeline::new(TriggerMode::Living);
        let gen = p.on_edit("v1").expect("armed");
        let first = p.on_timer(gen).expect("first request");
        let gen = p.on_edit("v2").expect("armed");
        assert!(p.on_timer(gen).is_none());
        // Another edit re-arms the debounce before the response arrives.
        let gen = p.on_edit("v3").expect("armed");

        let out = p.on_response(first.id, Ok("<p>v1</p>".to_string()));
        assert!(out.next.is_none());
        let req = p.on_timer(gen).expect("armed timer renders");
        assert_eq!(req.content, "v3");
    }

    #[test]
    fn test_unknown_response_is_dropped() {
        let mut p = RenderPipeline::new(TriggerMode::Manual);
        let req = p.on_init("a").expect("request");
        let out = p.on_response(req.id + 7, Ok("<p>old</p>".to_string()));
        assert_eq!(out.update, PreviewUpdate::Unchanged);
        assert!(p.is_stale());
    }

    #[test]
    fn test_same_content_rendered_twice_is_idempotent() {
        let mut p = RenderPipeline::new(TriggerMode::Manual);
        let a = p.on_preview_activated("same").expect("request");
        let ua = p.on_response(a.id, Ok("<p>same</p>".to_string())).update;
        let b = p.on_preview_activated("same").expect("request");
        let ub = p.on_response(b.id, Ok("<p>same</p>".to_string())).update;
        assert_eq!(ua, ub);
    }
}
