use leptos::prelude::*;
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;

use crate::content::Section;
use crate::scrollspy::active_section_at;

/// Navigation state owned by the page component: the highlighted section
/// and the mobile menu flag. Everything is transient and resets on reload.
#[derive(Clone, Copy)]
pub struct NavState {
    active_section: ReadSignal<Section>,
    mobile_menu_open: ReadSignal<bool>,
    set_mobile_menu_open: WriteSignal<bool>,
}

impl NavState {
    /// Creates the state and wires the scrollspy. `use_window_scroll`
    /// registers a single scroll listener scoped to the calling component,
    /// so the listener is dropped with the page and never leaks across
    /// remounts.
    pub fn new() -> Self {
        let (active_section, set_active_section) = signal(Section::Home);
        let (mobile_menu_open, set_mobile_menu_open) = signal(false);

        let (_, scroll_y) = use_window_scroll();
        Effect::new(move |_| {
            let y = scroll_y.get();
            // keep the previous selection when nothing qualifies
            if let Some(section) = active_section_at(y, &section_offsets()) {
                set_active_section.set(section);
            }
        });

        Self {
            active_section,
            mobile_menu_open,
            set_mobile_menu_open,
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section.get()
    }

    pub fn menu_open(&self) -> bool {
        self.mobile_menu_open.get()
    }

    pub fn open_menu(&self) {
        self.set_mobile_menu_open.set(true);
    }

    pub fn close_menu(&self) {
        self.set_mobile_menu_open.set(false);
    }

    /// Smooth-scrolls to the section and closes the mobile menu overlay,
    /// whether or not it was open and whether or not the target exists.
    pub fn scroll_to(&self, section: Section) {
        scroll_to_section(section);
        self.close_menu();
    }
}

/// Top offsets of the section elements currently in the document, in
/// display order. Computed per scroll event - layout shifts move offsets.
fn section_offsets() -> Vec<(Section, f64)> {
    Section::ALL
        .iter()
        .filter_map(|section| {
            document()
                .get_element_by_id(section.id())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|el| (*section, f64::from(el.offset_top())))
        })
        .collect()
}

/// A missing target is silently ignored.
fn scroll_to_section(section: Section) {
    if let Some(el) = document().get_element_by_id(section.id()) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[component]
pub fn Header(nav: NavState) -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-gray-950/90 shadow-md">
            <nav class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <button
                        class="md:hidden p-2 rounded-md text-gray-300 hover:text-gray-100"
                        aria-label="Open mobile menu"
                        on:click=move |_| nav.open_menu()
                    >
                        <MenuIcon />
                    </button>
                    <ul class="hidden md:flex justify-center space-x-4 lg:space-x-8 mx-auto">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <NavButton nav=nav section=section />
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </nav>
        </header>
    }
}

/// Full-screen overlay menu for narrow viewports. Rendered only while open.
#[component]
pub fn MobileMenu(nav: NavState) -> impl IntoView {
    view! {
        {move || {
            nav.menu_open()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 z-50 bg-gray-950/95 flex items-center justify-center">
                            <button
                                class="absolute top-4 right-4 p-2 text-gray-300 hover:text-gray-100"
                                aria-label="Close mobile menu"
                                on:click=move |_| nav.close_menu()
                            >
                                <CloseIcon />
                            </button>
                            <ul class="flex flex-col space-y-4">
                                {Section::ALL
                                    .into_iter()
                                    .map(|section| {
                                        view! {
                                            <li class="text-center">
                                                <NavButton nav=nav section=section large=true />
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn NavButton(nav: NavState, section: Section, #[prop(optional)] large: bool) -> impl IntoView {
    let size = if large { "text-lg" } else { "text-sm lg:text-lg" };
    view! {
        <button
            class=move || {
                let tone = if nav.active_section() == section {
                    "text-teal-400"
                } else {
                    "text-gray-400 hover:text-gray-100"
                };
                format!("px-3 py-2 rounded-md font-medium transition-colors {size} {tone}")
            }
            on:click=move |_| nav.scroll_to(section)
        >
            {section.title()}
        </button>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg
            class="h-6 w-6"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path stroke-linecap="round" d="M4 6h16M4 12h16M4 18h16" />
        </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg
            class="h-6 w-6"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path stroke-linecap="round" d="M6 6l12 12M18 6L6 18" />
        </svg>
    }
}
