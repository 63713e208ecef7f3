use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Section, EXPERIENCE};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-20 bg-gray-900/50">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold mb-12 text-center text-gray-100">
                    "Work Experience"
                </h2>
                <Reveal>
                    {EXPERIENCE
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="bg-gray-900 border border-gray-800 rounded-lg shadow mb-8">
                                    <div class="p-6 pb-0">
                                        <h3 class="text-xl font-semibold text-gray-100">
                                            {entry.role}
                                        </h3>
                                        <p class="text-sm text-gray-400">
                                            {entry.organization} " | " {entry.period}
                                        </p>
                                    </div>
                                    <div class="p-6">
                                        <ul class="list-disc pl-5 space-y-2 text-gray-400">
                                            {entry
                                                .bullets
                                                .iter()
                                                .map(|bullet| view! { <li>{*bullet}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
