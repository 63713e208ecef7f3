use leptos::prelude::*;

use super::nav::NavState;
use super::reveal::{Reveal, SlideFrom};
use crate::content::{Section, AVATAR_IMAGE};

#[component]
pub fn HomeSection(nav: NavState) -> impl IntoView {
    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center bg-gray-950"
        >
            <div class="container mx-auto px-6 py-20">
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <div class="md:w-1/2 mb-10 md:mb-0 flex flex-col items-center">
                        <Reveal class="mb-6" from=SlideFrom::Above duration=0.8>
                            <img
                                src=AVATAR_IMAGE
                                alt="Kumud"
                                width="192"
                                height="192"
                                class="rounded-full object-cover shadow-lg"
                            />
                        </Reveal>
                        <Reveal from=SlideFrom::Above delay=0.2 duration=0.8>
                            <h1 class="text-5xl font-bold mb-8 text-gray-100 text-center">
                                "Kumud Chandra Bhatt"
                            </h1>
                        </Reveal>
                        <Reveal from=SlideFrom::Still delay=0.4 duration=0.8>
                            <button
                                class="bg-teal-500 hover:bg-teal-400 text-gray-950 font-medium px-8 py-3 rounded-md transition-colors"
                                on:click=move |_| nav.scroll_to(Section::Contact)
                            >
                                "Get in touch"
                            </button>
                        </Reveal>
                    </div>
                    <Reveal class="md:w-1/2" from=SlideFrom::Right>
                        <div class="bg-gray-900 border border-gray-800 rounded-lg shadow">
                            <div class="p-6 pb-0">
                                <h2 class="text-2xl font-bold text-gray-100">"About Me"</h2>
                            </div>
                            <div class="p-6">
                                <p class="text-lg mb-4 text-gray-400">
                                    "I'm a Computer Science and Engineering student at Graphic Era University, Dehradun. I'm passionate about full-stack development and have experience working on various projects and internships."
                                </p>
                                <p class="text-lg text-gray-400">
                                    "I'm always eager to learn and take on new challenges in the field of software development."
                                </p>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
