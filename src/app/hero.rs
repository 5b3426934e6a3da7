use leptos::prelude::*;

use super::nav::use_nav;
use crate::{navigation::Section, portfolio::Portfolio};

#[component]
pub fn Hero(portfolio: &'static Portfolio) -> impl IntoView {
    let navigator = use_nav().navigator;
    let orb_nav = navigator.clone();

    view! {
        <section class="min-h-screen flex items-center justify-center px-6 pt-32 relative">
            <div class="text-center z-10 hero-enter">
                <div class="mb-8 transition-transform duration-300 hover:scale-[1.02]">
                    <h1 class="text-5xl font-bold mb-4 bg-gradient-to-r from-purple-400 via-pink-300 to-purple-400 bg-clip-text text-transparent gradient-pan">
                        {portfolio.headline.as_str()}
                    </h1>
                    <p class="text-xl text-gray-400">{portfolio.tagline.as_str()}</p>
                </div>
                <button
                    type="button"
                    aria-label="Go to projects"
                    class="mx-auto w-48 h-48 bg-gradient-to-r from-purple-500 to-indigo-500 rounded-full cursor-pointer relative flex items-center justify-center transition-transform duration-200 hover:scale-105 active:scale-95"
                    on:click=move |_| orb_nav.activate(Section::Projects)
                >
                    <span class="orb-pulse absolute inset-0 rounded-full"></span>
                    <span class="w-44 h-44 bg-gray-900 rounded-full flex items-center justify-center">
                        <span class="spin-slow text-6xl text-purple-500 font-bold">"</>"</span>
                    </span>
                </button>
                <div
                    class="mt-12 flex flex-col items-center cursor-pointer transition-transform hover:translate-y-1"
                    on:click=move |_| navigator.activate(Section::Projects)
                >
                    <span class="bob text-3xl text-purple-500">"↓"</span>
                    {portfolio
                        .bio
                        .iter()
                        .enumerate()
                        .map(|(i, paragraph)| {
                            let class = if i == 0 {
                                "text-2xl text-gray-100 max-w-4xl mx-auto mt-6 font-medium leading-relaxed tracking-wide fade-in"
                            } else {
                                "text-2xl text-gray-200 max-w-4xl mx-auto mt-6 font-light leading-relaxed tracking-wide fade-in"
                            };
                            view! { <p class=class>{paragraph.as_str()}</p> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
