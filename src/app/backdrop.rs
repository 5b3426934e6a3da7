use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    particles::{ParticleConfig, ParticleField},
    site::Theme,
};

const FIELD_WIDTH: f64 = 1920.0;
const FIELD_HEIGHT: f64 = 1080.0;
const FIELD_SEED: u64 = 0x5EED_CAFE;
const TICK_MS: u64 = 33;

/// Drifting, linked dots behind the page content.
#[component]
pub fn Backdrop(theme: Theme) -> impl IntoView {
    let field = RwSignal::new(ParticleField::generate(
        ParticleConfig::default(),
        FIELD_WIDTH,
        FIELD_HEIGHT,
        FIELD_SEED,
    ));

    // no-op during SSR, so the first client render matches the server's
    let _ = use_interval_fn(move || field.update(|f| f.step(TICK_MS as f64)), TICK_MS);

    let color = theme.link_color();

    view! {
        <svg
            class="fixed inset-0 -z-10 w-full h-full pointer-events-none"
            viewBox=format!("0 0 {FIELD_WIDTH} {FIELD_HEIGHT}")
            preserveAspectRatio="xMidYMid slice"
            aria-hidden="true"
        >
            {move || {
                field
                    .with(|f| {
                        let links = f
                            .links()
                            .into_iter()
                            .map(|link| {
                                let a = f.particles[link.from];
                                let b = f.particles[link.to];
                                view! {
                                    <line
                                        x1=format!("{:.1}", a.x)
                                        y1=format!("{:.1}", a.y)
                                        x2=format!("{:.1}", b.x)
                                        y2=format!("{:.1}", b.y)
                                        stroke=color
                                        stroke-opacity=format!("{:.3}", link.opacity)
                                        stroke-width="1"
                                    />
                                }
                            })
                            .collect_view();
                        let dots = f
                            .particles
                            .iter()
                            .map(|p| {
                                view! {
                                    <circle
                                        cx=format!("{:.1}", p.x)
                                        cy=format!("{:.1}", p.y)
                                        r=f.config.size.to_string()
                                        fill=color
                                        fill-opacity=f.config.opacity.to_string()
                                    />
                                }
                            })
                            .collect_view();
                        view! { <g>{links}{dots}</g> }
                    })
            }}
        </svg>
    }
}
