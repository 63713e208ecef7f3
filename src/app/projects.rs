use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{project_image, ProjectEntry, Section, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 bg-gray-950">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold mb-12 text-center text-gray-100">"My Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard project=*project index=index /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry, index: usize) -> impl IntoView {
    // a project without a registered image is a content defect, not a
    // runtime condition - see content::tests
    let image = project_image(project.title)
        .expect("every project should have an image registered in content::PROJECT_IMAGES");

    view! {
        <Reveal delay={index as f64 * 0.1}>
            <div class="bg-gray-900 border border-gray-800 rounded-lg shadow h-full flex flex-col overflow-hidden">
                <div class="relative w-full pt-[56.25%]">
                    <img
                        src=image
                        alt=project.title
                        class="absolute top-0 left-0 w-full h-full object-cover"
                    />
                </div>
                <div class="p-6 pb-0">
                    <h3 class="text-xl font-bold text-gray-100">{project.title}</h3>
                    <p class="text-sm text-gray-400">{project.description}</p>
                </div>
                <div class="p-6 flex-grow">
                    <div class="flex flex-wrap gap-2">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="bg-teal-500 text-gray-950 px-2 py-1 rounded text-xs">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="p-6 pt-0">
                    <a
                        href=project.repository_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="block w-full text-center border border-gray-700 hover:bg-gray-800 text-gray-100 font-medium px-4 py-2 rounded-md transition-colors"
                    >
                        "View on GitHub"
                    </a>
                </div>
            </div>
        </Reveal>
    }
}
