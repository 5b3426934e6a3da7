use leptos::prelude::*;

use super::dom::{BrowserScheduler, DomScroller};
use crate::navigation::{Navigator, Section};

pub type PageNavigator = Navigator<DomScroller, BrowserScheduler>;

/// Navigator plus a signal mirroring its active section, shared through context.
#[derive(Clone)]
pub struct NavContext {
    pub navigator: PageNavigator,
    pub active: ReadSignal<Option<Section>>,
}

impl NavContext {
    pub fn provide() -> Self {
        let navigator = Navigator::new(DomScroller, BrowserScheduler);
        let (active, set_active) = signal(None::<Section>);
        navigator.subscribe(move |section| set_active.set(section));
        let ctx = Self { navigator, active };
        provide_context(ctx.clone());
        ctx
    }
}

pub fn use_nav() -> NavContext {
    expect_context::<NavContext>()
}

#[component]
pub fn NavBar(owner: &'static str) -> impl IntoView {
    let NavContext { navigator, active } = use_nav();

    view! {
        <nav class="fixed top-0 w-full p-6 flex justify-between items-center backdrop-blur-lg z-50">
            <h1 class="text-2xl font-bold flex items-center gap-2 fade-in">
                <span class="text-3xl text-purple-500">"</>"</span>
                <span>{owner}</span>
            </h1>
            <div class="flex gap-6 relative">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let navigator = navigator.clone();
                        view! {
                            <button
                                type="button"
                                class="relative overflow-hidden px-4 py-2 rounded-lg transition-transform duration-200 hover:scale-105 active:scale-95"
                                on:click=move |_| navigator.activate(section)
                            >
                                <span class=move || {
                                    if active.get() == Some(section) {
                                        "text-purple-500 transition-colors"
                                    } else {
                                        "transition-colors"
                                    }
                                }>{section.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
