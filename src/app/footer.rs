use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-gray-900/50 py-8">
            <div class="container mx-auto px-6">
                <div class="flex justify-center space-x-6">
                    <a
                        href="https://github.com/KumudBhatt"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-400 hover:text-teal-400 text-2xl"
                        aria-label="GitHub"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href="https://www.linkedin.com/in/kumud-bhatt-49456a242/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-400 hover:text-teal-400 text-2xl"
                        aria-label="LinkedIn"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href="mailto:kumud.bhatt444@gmail.com"
                        class="text-gray-400 hover:text-teal-400 text-2xl"
                        aria-label="Email"
                    >
                        <i class="extra-email"></i>
                    </a>
                </div>
                <p class="mt-8 text-center text-base text-gray-400">
                    "© " {year} " Kumud Chandra Bhatt. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
