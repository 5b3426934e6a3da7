use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::navigation::Section;

/// Share of the section that must be on screen before it fades in.
const REVEAL_THRESHOLD: f64 = 0.2;

/// Inline style delaying a staggered child's entrance by `index * step` seconds.
pub fn stagger(index: usize, step: f64) -> String {
    format!("transition-delay: {:.1}s", index as f64 * step)
}

/// A page section that slides in the first time it scrolls into view. The
/// section's anchor id is the navigator's scroll target.
#[component]
pub fn RevealSection(
    section: Section,
    #[prop(optional)] layout: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Section>::new();
    let (revealed, set_revealed) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    // reveal once
    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    view! {
        <section
            node_ref=target
            id=section.anchor_id()
            class=move || {
                if revealed.get() {
                    format!("reveal revealed {layout}")
                } else {
                    format!("reveal {layout}")
                }
            }
        >
            {children()}
        </section>
    }
}
