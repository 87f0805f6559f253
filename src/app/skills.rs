use leptos::{either::Either, prelude::*};

use super::reveal::RevealSection;
use crate::content::{SkillGroup, SKILL_GROUPS};
use crate::ui::{is_small_device, slides_per_view};
#[cfg(feature = "hydrate")]
use crate::ui::CAROUSEL_INTERVAL_MS;

#[component]
pub fn Skills() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let width = leptos_use::use_window_size().width;
    #[cfg(not(feature = "hydrate"))]
    let width = Signal::derive(|| 1280.0);

    let (cursor, set_cursor) = signal(0usize);
    #[cfg(feature = "hydrate")]
    {
        // Auto-advance the carousel, wrapping back to the first group.
        let _ = leptos_use::use_interval_fn(
            move || set_cursor.update(|c| *c = (*c + 1) % SKILL_GROUPS.len()),
            CAROUSEL_INTERVAL_MS,
        );
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_cursor;

    view! {
        <RevealSection id="skills" class="py-24 bg-gray-800 relative">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-20 bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                    "Technical Expertise"
                </h2>
                {move || {
                    let viewport_width = width.get();
                    if is_small_device(viewport_width) {
                        // Small devices get the full grid; no carousel.
                        Either::Left(
                            view! {
                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                                    {SKILL_GROUPS.iter().map(skill_card).collect_view()}
                                </div>
                            },
                        )
                    } else {
                        let visible = slides_per_view(viewport_width);
                        Either::Right(
                            view! {
                                <div
                                    class="grid gap-6"
                                    style=format!("grid-template-columns: repeat({visible}, 1fr)")
                                >
                                    {(0..visible)
                                        .map(|offset| {
                                            skill_card(
                                                &SKILL_GROUPS[(cursor() + offset) % SKILL_GROUPS.len()],
                                            )
                                        })
                                        .collect_view()}
                                </div>
                            },
                        )
                    }
                }}
            </div>
        </RevealSection>
    }
}

fn skill_card(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="group">
            <div class="p-8 rounded-2xl transition-all duration-500 hover:scale-105 hover:shadow-2xl backdrop-blur-sm border bg-gray-700/50 border-gray-600 hover:bg-gray-700/70">
                <div class=format!(
                    "w-16 h-16 flex items-center justify-center rounded-2xl bg-gradient-to-r {} p-4 mb-6 group-hover:rotate-12 transition-transform duration-300",
                    group.accent_gradient,
                )>
                    <i class=format!("{} text-3xl text-white", group.icon)></i>
                </div>
                <h3 class="text-2xl font-semibold mb-3">{group.title}</h3>
                <p class="text-gray-300">{group.skills}</p>
            </div>
        </div>
    }
}
