use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::{ProjectRecord, ACADEMIC_PROJECTS, PLACEHOLDER_IMAGE, WORK_PROJECTS};
use crate::ui::SelectionState;

#[component]
pub fn Projects() -> impl IntoView {
    let selection = RwSignal::new(SelectionState::default());

    view! {
        <RevealSection id="projects" class="py-24 bg-gray-900 relative overflow-hidden">
            <div class="container mx-auto px-6 relative z-10">
                <div class="text-center mb-20">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-blue-500 to-purple-500 bg-clip-text text-transparent">
                        "Featured Projects"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-blue-500 to-purple-600 mx-auto mt-4 rounded-full"></div>
                    <p class="text-xl text-gray-300 mt-6 max-w-3xl mx-auto">
                        "A collection of my recent work, showcasing my skills and experience in web development"
                    </p>
                </div>
                <ProjectGallery heading="Work Projects" projects=WORK_PROJECTS selection />
                <ProjectGallery heading="Academic Projects" projects=ACADEMIC_PROJECTS selection />
            </div>
        </RevealSection>
        <ProjectModal selection />
    }
}

#[component]
fn ProjectGallery(
    heading: &'static str,
    projects: &'static [ProjectRecord],
    selection: RwSignal<SelectionState>,
) -> impl IntoView {
    view! {
        <div class="w-full mb-16">
            <h3 class="text-2xl font-bold text-white mb-6 border-b border-gray-700 pb-2">
                {heading}
            </h3>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {projects
                    .iter()
                    .map(|project| view! { <ProjectCard project selection /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(
    project: &'static ProjectRecord,
    selection: RwSignal<SelectionState>,
) -> impl IntoView {
    view! {
        <div
            class="group relative overflow-hidden rounded-2xl bg-gray-800/50 backdrop-blur-sm border border-gray-700 hover:border-transparent transition-all duration-500 hover:shadow-2xl hover:shadow-blue-500/10 cursor-pointer"
            on:click=move |_| selection.update(|state| state.open(project.clone()))
        >
            <div class="relative overflow-hidden h-56">
                <div class=format!(
                    "absolute inset-0 bg-gradient-to-r {} opacity-20 group-hover:opacity-30 transition-opacity duration-500",
                    project.accent_gradient,
                )></div>
                <img
                    src=project.image_path
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                    on:error=fallback_to_placeholder
                />
                <div class="absolute bottom-0 left-0 p-6 w-full">
                    <div class="flex flex-wrap gap-2 mb-3">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 bg-gray-700/80 text-xs font-medium text-gray-200 rounded-full backdrop-blur-sm">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-2xl font-bold text-white mb-2 group-hover:text-blue-400 transition-colors duration-300">
                    {project.title}
                </h3>
                <p class="text-gray-300 mb-4 line-clamp-2">{project.description}</p>
                <div class="flex items-center justify-between pt-4 border-t border-gray-700">
                    {project
                        .repository_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center text-gray-300 hover:text-white transition-colors"
                                    aria-label=format!("View {} on GitHub", project.title)
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <i class="devicon-github-plain mr-2"></i>
                                    <span class="text-sm font-medium">"Code"</span>
                                </a>
                            }
                        })}
                    {project
                        .live_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center px-4 py-2 bg-gradient-to-r from-blue-600 to-blue-700 text-white text-sm font-medium rounded-lg hover:shadow-lg hover:shadow-blue-500/20 transition-all duration-300"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

/// Detail overlay for the selected project. The backdrop and the close
/// control both clear the selection; clicks inside the panel stay inside it.
#[component]
fn ProjectModal(selection: RwSignal<SelectionState>) -> impl IntoView {
    move || {
        selection
            .with(|state| state.active().cloned())
            .map(|project| {
                view! {
                    <div
                        class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm"
                        on:click=move |_| selection.update(|state| state.close())
                    >
                        <div
                            class="bg-gray-900 rounded-2xl shadow-2xl max-w-lg w-full p-8 relative"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <button
                                class="absolute top-4 right-4 text-gray-400 hover:text-white"
                                aria-label="Close"
                                on:click=move |_| selection.update(|state| state.close())
                            >
                                "✕"
                            </button>
                            <img
                                src=project.image_path
                                alt=project.title
                                class="w-full h-48 object-cover rounded-xl mb-6"
                                on:error=fallback_to_placeholder
                            />
                            <h3 class="text-2xl font-bold mb-2 text-blue-400">{project.title}</h3>
                            <p class="mb-4 text-gray-300">{project.description}</p>
                            <div class="flex flex-wrap gap-2 mb-4">
                                {project
                                    .technologies
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-3 py-1 bg-gradient-to-r from-blue-500/20 to-purple-500/20 text-blue-400 rounded-full text-sm font-medium border border-blue-500/30">
                                                {*tech}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="flex space-x-4">
                                {project
                                    .repository_url
                                    .map(|url| {
                                        view! {
                                            <a
                                                href=url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center px-4 py-2 rounded-lg transition-all duration-300 hover:scale-105 text-gray-300 hover:text-white hover:bg-gray-700"
                                            >
                                                <i class="devicon-github-plain mr-2"></i>
                                                "Code"
                                            </a>
                                        }
                                    })}
                                {project
                                    .live_url
                                    .map(|url| {
                                        view! {
                                            <a
                                                href=url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center px-4 py-2 rounded-lg transition-all duration-300 hover:scale-105 text-gray-300 hover:text-white hover:bg-gray-700"
                                            >
                                                "Live Demo"
                                            </a>
                                        }
                                    })}
                            </div>
                        </div>
                    </div>
                }
            })
    }
}

/// Swaps a broken project image for the bundled placeholder, once.
fn fallback_to_placeholder(ev: leptos::ev::ErrorEvent) {
    let img = event_target::<web_sys::HtmlImageElement>(&ev);
    if !img.src().ends_with(PLACEHOLDER_IMAGE) {
        img.set_src(PLACEHOLDER_IMAGE);
    }
}
