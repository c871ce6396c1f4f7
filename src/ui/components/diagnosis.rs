use dioxus::prelude::*;
use tracing::{error, info};

use crate::config::Config;
use crate::dx_client::{DxClient, DxError};
use crate::models::DiagnosisResult;
use crate::ui::components::toast_context::ToastContext;
use crate::ui::Route;

/// Submission is only allowed for input with at least one non-whitespace
/// character. Gates both the submit button and the submit handler, so no
/// request can be sent for blank input.
fn has_symptom_text(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Symptom diagnosis page.
///
/// Owns the full request/response cycle: free-text input, one POST to the
/// diagnosis service, and either an error toast or the ranked results. The
/// submit control is gone for the whole time a request is in flight, so at
/// most one request is ever outstanding.
#[component]
pub fn Diagnosis() -> Element {
    let mut symptoms = use_signal(String::new);
    let mut diagnosis = use_signal(Vec::<DiagnosisResult>::new);
    let mut is_loading = use_signal(|| false);
    let toast_ctx = use_context::<ToastContext>();

    let submit = move |_: MouseEvent| {
        let input = symptoms.read().clone();
        if !has_symptom_text(&input) {
            toast_ctx.show_error("Invalid input", "Fill in the text field");
            return;
        }

        is_loading.set(true);

        spawn(async move {
            let client = DxClient::from_config(&Config::load());

            match client.send_text(&input).await {
                Ok(predictions) => {
                    info!("received {} predictions", predictions.len());
                    diagnosis.set(predictions);
                }
                Err(DxError::Decode(e)) => {
                    error!("could not decode diagnosis: {}", e);
                    toast_ctx.show_error("Error", "Error getting diagnosis");
                }
                Err(e) => {
                    error!("diagnosis request failed: {}", e);
                    toast_ctx.show_error("Error", "Server error getting diagnosis");
                }
            }

            // Every exit path lands here so the page can never stay stuck
            // on the loading screen.
            is_loading.set(false);
        });
    };

    if *is_loading.read() {
        return rsx! {
            div {
                class: "h-screen flex flex-col items-center justify-center",
                span { class: "loading-ring" }
                p {
                    class: "text-gray-600 mt-4",
                    "Getting diagnosis..."
                }
            }
        };
    }

    rsx! {
        div {
            class: "container mx-auto p-6 flex flex-col items-center",
            div {
                class: "w-full max-w-md bg-white rounded-lg shadow-lg p-6 mb-6",
                h1 {
                    class: "text-2xl font-bold mb-2",
                    "Symptom Diagnosis"
                }
                p {
                    class: "text-gray-600 mb-4",
                    "Describe your symptoms for an AI-assisted diagnosis"
                }
                textarea {
                    class: "w-full p-3 border border-gray-300 rounded-lg text-lg mb-4",
                    rows: "6",
                    placeholder: "Describe your symptoms here...",
                    value: "{symptoms}",
                    oninput: move |event| {
                        symptoms.set(event.value());
                    }
                }
                button {
                    class: "w-full px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium disabled:opacity-50",
                    disabled: !has_symptom_text(&symptoms.read()),
                    onclick: submit,
                    "Submit for Diagnosis"
                }
            }

            if !diagnosis.read().is_empty() {
                div {
                    class: "w-full max-w-md bg-white rounded-lg shadow-lg p-6 mb-6",
                    h2 {
                        class: "text-xl font-bold mb-2",
                        "Diagnosis Results"
                    }
                    p {
                        class: "text-gray-600 mb-4",
                        "Likelihood of diagnosis based on symptoms"
                    }
                    ul {
                        class: "space-y-2",
                        for result in diagnosis.read().iter() {
                            li {
                                class: "flex justify-between items-center",
                                span { "{result.label}" }
                                span {
                                    class: "font-semibold",
                                    {result.probability_percent()}
                                }
                            }
                        }
                    }
                }
            }

            Link {
                to: Route::Home {},
                class: "mt-8 px-6 py-3 border border-gray-300 rounded-lg hover:bg-gray-100 transition-colors",
                "Back to Home"
            }
            div {
                class: "mt-8 text-center text-sm text-gray-500 max-w-md",
                p {
                    strong { "Disclaimer: " }
                    "This AI-assisted diagnosis tool is for informational purposes only and does not substitute professional medical advice, diagnosis, or treatment."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_not_submittable() {
        assert!(!has_symptom_text(""));
        assert!(!has_symptom_text("   "));
        assert!(!has_symptom_text("\n\t"));
    }

    #[test]
    fn non_blank_input_is_submittable() {
        assert!(has_symptom_text("fever and cough"));
        assert!(has_symptom_text("  headache  "));
    }
}
