mod contact;
mod experience;
mod footer;
mod home;
mod nav;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::ContactSection;
use experience::ExperienceSection;
use footer::Footer;
use home::HomeSection;
use nav::{Header, MobileMenu, NavState};
use projects::ProjectsSection;
use skills::SkillsSection;

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
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-950 text-gray-100 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Kumud Chandra Bhatt - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole site is one page; the navigation state it owns is handed down
/// to every component that reads or drives it.
#[component]
fn Portfolio() -> impl IntoView {
    let nav = NavState::new();

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-b from-gray-950 to-gray-900 text-gray-100">
            <Header nav=nav />
            <MobileMenu nav=nav />
            <main class="pt-20">
                <HomeSection nav=nav />
                <ExperienceSection />
                <ProjectsSection />
                <SkillsSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
