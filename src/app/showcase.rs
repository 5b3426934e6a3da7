use leptos::prelude::*;

use super::reveal::{stagger, RevealSection};
use crate::{
    navigation::Section,
    portfolio::{ContactLink, Project, Skill, TILE_ALPHA},
};

const PROJECT_STAGGER: f64 = 0.2;
const SKILL_STAGGER: f64 = 0.1;

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <RevealSection section=Section::Projects layout="py-20 px-6">
            <div class="max-w-6xl mt-48 mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12">"Featured Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div
                                    class="stagger-rise p-6 rounded-xl bg-gray-800 hover:bg-gray-700 transition-colors group relative overflow-hidden"
                                    style=stagger(i, PROJECT_STAGGER)
                                >
                                    <div class="absolute inset-0 bg-gradient-to-r from-purple-500 to-indigo-500 opacity-0 group-hover:opacity-10 transition-opacity"></div>
                                    <h3 class="text-xl font-bold mb-2">{project.title.as_str()}</h3>
                                    <p class="text-gray-400 mb-4">{project.tech.as_str()}</p>
                                    <a
                                        href=project.link.as_str()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-purple-500 hover:text-purple-400 flex items-center gap-2"
                                    >
                                        "View Project"
                                        <span class="inline-block -rotate-45">"→"</span>
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn SkillsSection(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <RevealSection section=Section::Skills layout="py-20 px-6 bg-gray-800">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12">"Technical Skills"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    {skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            let style = format!(
                                "background: {}; {}",
                                skill.color.tinted(TILE_ALPHA),
                                stagger(i, SKILL_STAGGER),
                            );
                            view! {
                                <div
                                    class="stagger-pop p-4 rounded-xl flex flex-col items-center gap-3 hover:-translate-y-2 transition-all duration-300"
                                    style=style
                                >
                                    <div class="text-4xl" style=format!("color: {}", skill.color)>
                                        <i class=skill.icon.class()></i>
                                    </div>
                                    <span class="font-medium">{skill.name.as_str()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn ContactSection(contacts: &'static [ContactLink]) -> impl IntoView {
    view! {
        <RevealSection section=Section::Contact layout="py-20 px-6">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl font-bold mb-8">"Let's Connect"</h2>
                <div class="flex justify-center gap-6">
                    {contacts
                        .iter()
                        .map(|contact| {
                            view! {
                                <a
                                    href=contact.link.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-4 rounded-full bg-gray-800 hover:bg-gray-700 hover:-translate-y-1 transition-all flex items-center gap-2"
                                >
                                    <i class=format!("{} text-2xl", contact.kind.class())></i>
                                    <span>{contact.label.as_str()}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
