use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use thiserror::Error;

/// How long a nav item stays highlighted after its section is activated.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1000);

/// A region of the page reachable from the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Nav bar order.
    pub const ALL: [Section; 3] = [Section::Projects, Section::Skills, Section::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Id of the DOM element the viewport scrolls to.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: Option<Section>,
}

/// Brings a section's target to the top of the viewport with an animated scroll.
pub trait Scroller: Send + Sync + 'static {
    fn scroll_to(&self, section: Section);
}

pub trait TimerHandle: Send + 'static {
    fn cancel(self);
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to schedule timer: {0}")]
pub struct ScheduleError(pub String);

pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Runs a callback once after a delay on the host event loop.
pub trait Scheduler: Send + Sync + 'static {
    type Handle: TimerHandle;

    fn schedule(&self, delay: Duration, callback: TimerCallback)
        -> Result<Self::Handle, ScheduleError>;
}

type Listener = Box<dyn Fn(Option<Section>) + Send + Sync + 'static>;

struct State<H> {
    nav: NavigationState,
    // bumped on every activation so a clear queued by an older one is ignored
    generation: u64,
    pending: Option<H>,
}

struct Shared<S: Scroller, T: Scheduler> {
    scroller: S,
    scheduler: T,
    state: Mutex<State<T::Handle>>,
    listeners: Mutex<Vec<Listener>>,
}

impl<S: Scroller, T: Scheduler> Shared<S, T> {
    fn state(&self) -> MutexGuard<'_, State<T::Handle>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, active: Option<Section>) {
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(active);
        }
    }

    fn expire(&self, generation: u64) {
        {
            let mut state = self.state();
            if state.generation != generation || state.nav.active_section.is_none() {
                return;
            }
            state.nav.active_section = None;
            state.pending = None;
        }
        log::trace!("nav highlight expired");
        self.notify(None);
    }
}

/// Scrolls to page sections and keeps the most recently chosen one highlighted
/// for [`HIGHLIGHT_DURATION`].
///
/// Clones share the same state. Listeners registered with
/// [`Navigator::subscribe`] must not subscribe further listeners from inside
/// the callback.
pub struct Navigator<S: Scroller, T: Scheduler> {
    inner: Arc<Shared<S, T>>,
}

impl<S: Scroller, T: Scheduler> Clone for Navigator<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Scroller, T: Scheduler> Navigator<S, T> {
    pub fn new(scroller: S, scheduler: T) -> Self {
        Self {
            inner: Arc::new(Shared {
                scroller,
                scheduler,
                state: Mutex::new(State {
                    nav: NavigationState::default(),
                    generation: 0,
                    pending: None,
                }),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn activate(&self, section: Section) {
        let (generation, stale) = {
            let mut state = self.inner.state();
            state.generation = state.generation.wrapping_add(1);
            state.nav.active_section = Some(section);
            (state.generation, state.pending.take())
        };
        if let Some(handle) = stale {
            handle.cancel();
        }
        log::debug!("activating section {section}");
        self.inner.notify(Some(section));
        self.inner.scroller.scroll_to(section);

        let shared: Weak<Shared<S, T>> = Arc::downgrade(&self.inner);
        let scheduled = self.inner.scheduler.schedule(
            HIGHLIGHT_DURATION,
            Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.expire(generation);
                }
            }),
        );

        match scheduled {
            Ok(handle) => {
                let mut state = self.inner.state();
                if state.generation == generation {
                    state.pending = Some(handle);
                } else {
                    drop(state);
                    handle.cancel();
                }
            }
            Err(err) => log::warn!("highlight for {section} will not expire: {err}"),
        }
    }

    pub fn current_active(&self) -> Option<Section> {
        self.inner.state().nav.active_section
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.current_active() == Some(section)
    }

    pub fn state(&self) -> NavigationState {
        self.inner.state().nav
    }

    /// Calls `listener` with the new active section every time it changes.
    pub fn subscribe(&self, listener: impl Fn(Option<Section>) + Send + Sync + 'static) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Timer {
        id: u64,
        due: Duration,
        callback: TimerCallback,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        timers: Vec<Timer>,
    }

    /// Virtual-time scheduler; timers only fire from `advance_to`.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        clock: Arc<Mutex<Clock>>,
    }

    struct ManualHandle {
        id: u64,
        clock: Arc<Mutex<Clock>>,
    }

    impl TimerHandle for ManualHandle {
        fn cancel(self) {
            let mut clock = self.clock.lock().unwrap();
            clock.timers.retain(|t| t.id != self.id);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(
            &self,
            delay: Duration,
            callback: TimerCallback,
        ) -> Result<ManualHandle, ScheduleError> {
            let mut clock = self.clock.lock().unwrap();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.timers.push(Timer { id, due, callback });
            Ok(ManualHandle {
                id,
                clock: Arc::clone(&self.clock),
            })
        }
    }

    impl ManualScheduler {
        fn advance_to(&self, millis: u64) {
            let target = Duration::from_millis(millis);
            loop {
                let next = {
                    let mut clock = self.clock.lock().unwrap();
                    let earliest = clock
                        .timers
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| t.due)
                        .map(|(i, _)| i);
                    match earliest {
                        Some(i) => {
                            let timer = clock.timers.remove(i);
                            clock.now = timer.due;
                            Some(timer.callback)
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }
        }

        fn pending(&self) -> usize {
            self.clock.lock().unwrap().timers.len()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingScroller {
        scrolled: Arc<Mutex<Vec<Section>>>,
    }

    impl Scroller for RecordingScroller {
        fn scroll_to(&self, section: Section) {
            self.scrolled.lock().unwrap().push(section);
        }
    }

    struct FailingScheduler;

    struct NeverHandle;

    impl TimerHandle for NeverHandle {
        fn cancel(self) {}
    }

    impl Scheduler for FailingScheduler {
        type Handle = NeverHandle;

        fn schedule(&self, _: Duration, _: TimerCallback) -> Result<NeverHandle, ScheduleError> {
            Err(ScheduleError("no event loop".to_string()))
        }
    }

    fn setup() -> (
        Navigator<RecordingScroller, ManualScheduler>,
        RecordingScroller,
        ManualScheduler,
    ) {
        let scroller = RecordingScroller::default();
        let scheduler = ManualScheduler::default();
        let nav = Navigator::new(scroller.clone(), scheduler.clone());
        (nav, scroller, scheduler)
    }

    #[test]
    fn test_starts_idle() {
        let (nav, scroller, scheduler) = setup();
        assert_eq!(nav.current_active(), None);
        assert_eq!(nav.state(), NavigationState::default());
        assert!(scroller.scrolled.lock().unwrap().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_activate_sets_section_immediately() {
        for section in Section::ALL {
            let (nav, _, _) = setup();
            nav.activate(section);
            assert_eq!(nav.current_active(), Some(section));
            assert!(nav.is_active(section));
        }
    }

    #[test]
    fn test_activate_scrolls_once_per_call() {
        let (nav, scroller, _) = setup();
        nav.activate(Section::Skills);
        nav.activate(Section::Contact);
        nav.activate(Section::Contact);
        assert_eq!(
            *scroller.scrolled.lock().unwrap(),
            vec![Section::Skills, Section::Contact, Section::Contact]
        );
    }

    #[test]
    fn test_highlight_clears_after_duration() {
        for section in Section::ALL {
            let (nav, _, scheduler) = setup();
            nav.activate(section);
            scheduler.advance_to(999);
            assert_eq!(nav.current_active(), Some(section));
            scheduler.advance_to(1000);
            assert_eq!(nav.current_active(), None);
            assert_eq!(scheduler.pending(), 0);
        }
    }

    #[test]
    fn test_projects_scenario() {
        let (nav, _, scheduler) = setup();
        nav.activate(Section::Projects);
        assert_eq!(nav.current_active(), Some(Section::Projects));
        scheduler.advance_to(999);
        assert_eq!(nav.current_active(), Some(Section::Projects));
        scheduler.advance_to(1001);
        assert_eq!(nav.current_active(), None);
    }

    #[test]
    fn test_newer_activation_supersedes_timer() {
        let (nav, _, scheduler) = setup();
        nav.activate(Section::Skills);
        scheduler.advance_to(500);
        nav.activate(Section::Contact);

        // only the latest clear is outstanding
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance_to(999);
        assert_eq!(nav.current_active(), Some(Section::Contact));
        scheduler.advance_to(1001);
        assert_eq!(nav.current_active(), Some(Section::Contact));
        scheduler.advance_to(1499);
        assert_eq!(nav.current_active(), Some(Section::Contact));
        scheduler.advance_to(1501);
        assert_eq!(nav.current_active(), None);
    }

    #[test]
    fn test_repeat_activation_restarts_timer() {
        let (nav, _, scheduler) = setup();
        nav.activate(Section::Projects);
        scheduler.advance_to(300);
        nav.activate(Section::Projects);
        scheduler.advance_to(1000);
        assert_eq!(nav.current_active(), Some(Section::Projects));
        scheduler.advance_to(1299);
        assert_eq!(nav.current_active(), Some(Section::Projects));
        scheduler.advance_to(1300);
        assert_eq!(nav.current_active(), None);
    }

    #[test]
    fn test_stale_clear_is_ignored() {
        let (nav, _, _) = setup();
        nav.activate(Section::Skills);
        let first = nav.inner.state().generation;
        nav.activate(Section::Contact);
        // a clear from the first activation that slipped past cancellation
        nav.inner.expire(first);
        assert_eq!(nav.current_active(), Some(Section::Contact));
    }

    #[test]
    fn test_reactivation_after_idle() {
        let (nav, _, scheduler) = setup();
        nav.activate(Section::Skills);
        scheduler.advance_to(1000);
        assert_eq!(nav.current_active(), None);
        nav.activate(Section::Projects);
        assert_eq!(nav.current_active(), Some(Section::Projects));
        scheduler.advance_to(2000);
        assert_eq!(nav.current_active(), None);
    }

    #[test]
    fn test_listeners_see_every_transition() {
        let (nav, _, scheduler) = setup();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        nav.subscribe(move |active| sink.lock().unwrap().push(active));

        nav.activate(Section::Skills);
        scheduler.advance_to(500);
        nav.activate(Section::Contact);
        scheduler.advance_to(1500);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Some(Section::Skills), Some(Section::Contact), None]
        );
    }

    #[test]
    fn test_clones_share_state() {
        let (nav, _, scheduler) = setup();
        let other = nav.clone();
        other.activate(Section::Contact);
        assert_eq!(nav.current_active(), Some(Section::Contact));
        scheduler.advance_to(1000);
        assert_eq!(nav.current_active(), None);
    }

    #[test]
    fn test_failed_schedule_keeps_highlight() {
        let nav = Navigator::new(RecordingScroller::default(), FailingScheduler);
        nav.activate(Section::Projects);
        assert_eq!(nav.current_active(), Some(Section::Projects));
        nav.activate(Section::Skills);
        assert_eq!(nav.current_active(), Some(Section::Skills));
    }

    #[test]
    fn test_section_metadata() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["Projects", "Skills", "Contact"]);
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor_id()).collect();
        assert_eq!(anchors, vec!["projects", "skills", "contact"]);
    }
}
