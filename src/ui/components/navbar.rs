use crate::ui::Route;
use dioxus::prelude::*;

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "navbar",
            class: "bg-gray-800 text-white p-4 flex space-x-6",
            Link {
                to: Route::Home {},
                class: "hover:text-blue-300 transition-colors",
                "Home"
            }
            Link {
                to: Route::Diagnosis {},
                class: "hover:text-blue-300 transition-colors",
                "Diagnosis"
            }
        }

        Outlet::<Route> {}
    }
}
