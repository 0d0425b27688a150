use std::sync::{Arc, Mutex};
use wasm_bindgen::JsCast;

/// Deferred callbacks. The browser implementation wraps `setTimeout`; tests drive a virtual clock.
pub trait Scheduler {
    /// Run `f` after `delay_ms`. Returns a handle usable with [`Scheduler::clear_timeout`].
    fn set_timeout(&self, delay_ms: i32, f: Box<dyn FnOnce()>) -> Option<i32>;
    fn clear_timeout(&self, handle: i32);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay_ms: i32, f: Box<dyn FnOnce()>) -> Option<i32> {
        let win = web_sys::window()?;
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || f());
        win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms,
        )
        .ok()
    }

    fn clear_timeout(&self, handle: i32) {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(handle);
        }
    }
}

/// Clear-then-set debounce: every [`Debounce::schedule`] cancels the pending callback.
#[derive(Clone)]
pub struct Debounce<S: Scheduler> {
    scheduler: S,
    delay_ms: i32,
    handle: Arc<Mutex<Option<i32>>>,
}

impl<S: Scheduler> Debounce<S> {
    pub fn new(scheduler: S, delay_ms: i32) -> Self {
        Self {
            scheduler,
            delay_ms: delay_ms.max(0),
            handle: Arc::new(Mutex::new(None)),
        }
    }

    pub fn delay_ms(&self) -> i32 {
        self.delay_ms
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        self.cancel();
        let tid = self.scheduler.set_timeout(self.delay_ms, Box::new(f));
        if let Ok(mut slot) = self.handle.lock() {
            *slot = tid;
        }
    }

    pub fn cancel(&self) {
        let prev = self.handle.lock().ok().and_then(|mut slot| slot.take());
        if let Some(tid) = prev {
            self.scheduler.clear_timeout(tid);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_debounce_fires_once_after_last_schedule() {
        let sched = ManualScheduler::default();
        let debounce = Debounce::new(sched.clone(), 400);
        let fired: Rc<RefCell<Vec<u64>>> = Rc::default();

        for t in [0, 100, 200] {
            sched.advance_to(t);
            let fired = fired.clone();
            let clock = sched.clone();
            debounce.schedule(move || fired.borrow_mut().push(clock.now()));
        }

        sched.advance_to(599);
        assert!(fired.borrow().is_empty());
        sched.advance_to(1000);
        assert_eq!(*fired.borrow(), vec![600]);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_cancel_drops_pending_callback() {
        let sched = ManualScheduler::default();
        let debounce = Debounce::new(sched.clone(), 50);
        let fired = Rc::new(RefCell::new(false));
        let f = fired.clone();
        debounce.schedule(move || *f.borrow_mut() = true);
        assert_eq!(sched.pending(), 1);
        debounce.cancel();
        assert_eq!(sched.pending(), 0);
        sched.advance_to(100);
        assert!(!*fired.borrow());
    }

    #[test]
    fn test_negative_delay_is_clamped() {
        let debounce = Debounce::new(ManualScheduler::default(), -5);
        assert_eq!(debounce.delay_ms(), 0);
    }
}
