use crate::ui::Route;
use dioxus::prelude::*;

/// Home page
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container mx-auto p-6",
            div {
                class: "text-center py-12",
                h1 {
                    class: "text-4xl font-bold mb-4",
                    "Welcome to dxcheck"
                }
                p {
                    class: "text-xl text-gray-600 mb-8",
                    "Describe your symptoms and get an AI-assisted diagnosis"
                }
                div {
                    class: "flex justify-center",
                    Link {
                        to: Route::Diagnosis {},
                        class: "bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700 transition-colors",
                        "Start a Diagnosis"
                    }
                }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-8 mt-12",
                div {
                    class: "text-center p-6",
                    h3 {
                        class: "text-xl font-bold mb-3",
                        "Describe"
                    }
                    p {
                        class: "text-gray-600",
                        "Write down your symptoms in your own words, no forms or checklists"
                    }
                }
                div {
                    class: "text-center p-6",
                    h3 {
                        class: "text-xl font-bold mb-3",
                        "Analyze"
                    }
                    p {
                        class: "text-gray-600",
                        "The diagnosis service ranks probable conditions from your description"
                    }
                }
                div {
                    class: "text-center p-6",
                    h3 {
                        class: "text-xl font-bold mb-3",
                        "Review"
                    }
                    p {
                        class: "text-gray-600",
                        "See each candidate condition with its likelihood, ready to discuss with a professional"
                    }
                }
            }
        }
    }
}
