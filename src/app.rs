mod backdrop;
mod dom;
mod hero;
mod nav;
mod reveal;
mod showcase;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    portfolio::{portfolio, Portfolio},
    site::{build_date, Theme, BUILD_TIME},
};
use backdrop::Backdrop;
use hero::Hero;
use nav::{NavBar, NavContext};
use showcase::{ContactSection, ProjectsSection, SkillsSection};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let owner = portfolio().map(|p| p.owner.clone()).unwrap_or_default();
    let theme = Theme::default();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <div class=format!("min-h-screen {}", theme.page_class())>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    NavContext::provide();
    let theme = Theme::default();

    match portfolio() {
        Ok(p) => Either::Left(view! { <PortfolioPage portfolio=p theme /> }),
        Err(err) => {
            log::error!("{err}");
            Either::Right(
                view! {
                    <Title text="Unavailable" />
                    <div class="flex min-h-screen items-center justify-center p-6 text-red-400">
                        {err.to_string()}
                    </div>
                },
            )
        }
    }
}

#[component]
fn PortfolioPage(portfolio: &'static Portfolio, theme: Theme) -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Backdrop theme />
        <NavBar owner=portfolio.owner.as_str() />
        <Hero portfolio />
        <ProjectsSection projects=portfolio.projects.as_slice() />
        <SkillsSection skills=portfolio.skills.as_slice() />
        <ContactSection contacts=portfolio.contacts.as_slice() />
        <Footer owner=portfolio.owner.as_str() />
    }
}

#[component]
fn Footer(owner: &'static str) -> impl IntoView {
    let built = build_date(BUILD_TIME).unwrap_or_else(|| BUILD_TIME.to_string());
    view! {
        <footer class="py-8 text-center text-sm text-gray-500">
            {format!("© {owner} · built {built}")}
        </footer>
    }
}
