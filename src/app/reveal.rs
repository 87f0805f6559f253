//! Wrapper that arms a section with a one-shot reveal animation. The section
//! renders fully visible; once its top edge scrolls past 80% of the viewport
//! the entrance plays, exactly once per mount.

use leptos::{html, prelude::*};

#[component]
pub fn RevealSection(
    id: &'static str,
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

        use super::animate::drive_timeline;
        use crate::motion::{section_reveal, RevealTrigger, Timeline};

        let start = drive_timeline(
            Timeline::new().then(section_reveal()),
            0.0,
            false,
            move || vec![section_ref.get_untracked()],
        );
        let trigger = StoredValue::new_local(RevealTrigger::new());
        let (_, scroll_y) = use_window_scroll();
        let UseWindowSizeReturn { height, .. } = use_window_size();
        Effect::new(move |_| {
            // Re-check on every scroll and resize; the trigger itself makes
            // sure the animation only ever plays once.
            scroll_y.track();
            let viewport_height = height.get();
            let Some(el) = section_ref.get_untracked() else {
                return;
            };
            let top = el.get_bounding_client_rect().top();
            let fired = trigger
                .try_update_value(|t| t.check(top, viewport_height))
                .unwrap_or(false);
            if fired {
                start();
            }
        });
    }

    view! {
        <section node_ref=section_ref id=id class=class>
            {children()}
        </section>
    }
}
