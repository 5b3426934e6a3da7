use std::time::Duration;

use leptos::prelude::{document, set_timeout_with_handle, TimeoutHandle};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::navigation::{ScheduleError, Scheduler, Scroller, Section, TimerCallback, TimerHandle};

/// Scrolls the section's anchor element to the top of the viewport.
pub struct DomScroller;

impl Scroller for DomScroller {
    fn scroll_to(&self, section: Section) {
        let Some(target) = document().get_element_by_id(section.anchor_id()) else {
            log::warn!("no element with id `{}`", section.anchor_id());
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// `setTimeout` on the window's event loop.
pub struct BrowserScheduler;

pub struct BrowserTimer(TimeoutHandle);

impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        self.0.clear();
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn schedule(
        &self,
        delay: Duration,
        callback: TimerCallback,
    ) -> Result<BrowserTimer, ScheduleError> {
        set_timeout_with_handle(callback, delay)
            .map(BrowserTimer)
            .map_err(|e| ScheduleError(format!("{e:?}")))
    }
}
