use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::EDUCATION;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <RevealSection id="education" class="py-20 bg-gray-900">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold mb-12 text-center bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                    "Education"
                </h2>
                <div class="space-y-8 max-w-2xl mx-auto">
                    {EDUCATION
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="flex items-start gap-4 bg-gradient-to-r from-blue-900/20 to-purple-900/10 rounded-xl p-6 shadow-lg">
                                    <span class="flex-shrink-0 w-12 h-12 bg-blue-600/20 rounded-full flex items-center justify-center text-2xl font-bold text-blue-500">
                                        {entry.badge}
                                    </span>
                                    <div>
                                        <h3 class=format!("text-xl font-semibold {}", entry.accent)>
                                            {entry.program}
                                        </h3>
                                        <p class="text-gray-300">
                                            {entry.institution} " "
                                            <span class="text-sm text-gray-400">
                                                "(" {entry.detail} ")"
                                            </span>
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
