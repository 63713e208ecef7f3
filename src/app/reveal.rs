use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Fraction of an element that must be visible before its entrance
/// animation fires.
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Where a hidden element sits before it slides into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideFrom {
    Above,
    Below,
    Right,
    /// Fade only, no translation.
    Still,
}

impl SlideFrom {
    fn hidden_classes(self) -> &'static str {
        match self {
            SlideFrom::Above => "opacity-0 -translate-y-12",
            SlideFrom::Below => "opacity-0 translate-y-12",
            SlideFrom::Right => "opacity-0 translate-x-12",
            SlideFrom::Still => "opacity-0",
        }
    }
}

/// Wraps its children in a div that starts hidden and transitions into
/// view the first time it crosses the visibility threshold. The flag is
/// set once and never unset, so scrolling the element out and back in
/// does not replay the animation.
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(default = SlideFrom::Below)] from: SlideFrom,
    /// Transition delay in seconds; cards pass `index * 0.1` to stagger.
    #[prop(optional)]
    delay: f64,
    /// Transition duration in seconds.
    #[prop(default = 0.5)]
    duration: f64,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if visible.get_untracked() {
                return;
            }
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_visible(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![VISIBILITY_THRESHOLD]),
    );

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if visible() {
                    "opacity-100 translate-x-0 translate-y-0"
                } else {
                    from.hidden_classes()
                };
                format!("{class} transition-all ease-out {state}")
            }
            style=format!("transition-duration: {duration}s; transition-delay: {delay}s")
        >
            {children()}
        </div>
    }
}
