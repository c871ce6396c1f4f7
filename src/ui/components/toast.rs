use dioxus::prelude::*;

use super::toast_context::{ToastContext, ToastVariant};

/// Fixed bottom-right notification overlay. Renders nothing while no toast
/// is active.
#[component]
pub fn Toast() -> Element {
    let toast_ctx = use_context::<ToastContext>();

    let Some(toast) = toast_ctx.current() else {
        return rsx! {};
    };

    let background = match toast.variant {
        ToastVariant::Info => "bg-gray-800",
        ToastVariant::Destructive => "bg-red-600",
    };

    rsx! {
        div {
            class: "fixed bottom-4 right-4 {background} text-white px-6 py-4 rounded-lg shadow-lg z-50 max-w-md",
            div {
                class: "flex items-center justify-between gap-4",
                div {
                    p { class: "font-semibold", "{toast.title}" }
                    p { class: "text-sm", "{toast.message}" }
                }
                button {
                    class: "text-white hover:text-gray-200",
                    onclick: move |_| toast_ctx.dismiss(),
                    "✕"
                }
            }
        }
    }
}
