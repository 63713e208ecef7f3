use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Section, SkillEntry, SKILLS};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 bg-gray-900/50">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold mb-12 text-center text-gray-100">"My Skills"</h2>
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-8">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            view! { <SkillCard skill=*skill index=index /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: SkillEntry, index: usize) -> impl IntoView {
    view! {
        <Reveal class="h-full" delay={index as f64 * 0.1}>
            <div class="bg-gray-900 border border-gray-800 rounded-lg shadow h-full flex flex-col items-center justify-center p-4 hover:shadow-md hover:shadow-teal-500/10 transition-shadow duration-300">
                <i class=format!("{} text-6xl mb-4 text-teal-400", skill.icon)></i>
                <h3 class="text-lg font-semibold text-gray-100 text-center">{skill.name}</h3>
            </div>
        </Reveal>
    }
}
