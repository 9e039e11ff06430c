use dioxus::prelude::*;

use tracing::debug;

use shop::game;

#[component]
pub fn GameSection() -> Element {
    // Form state
    let mut guess_signal = use_signal(|| String::new());

    // Message and styling for the last round, if any
    let mut result_signal = use_signal(|| None::<(String, bool)>);

    let handle_guess = move |_| {
        match game::parse_guess(&guess_signal()) {
            None => {
                // the rejected text stays in the input for correction
                result_signal.set(Some((game::INVALID_GUESS_MESSAGE.to_string(), false)));
            }
            Some(guess) => {
                let round = game::play(guess);

                debug!("guessed {} against {}", round.guess, round.target);

                result_signal.set(Some((round.message(), round.is_win())));
                guess_signal.set(String::new());
            }
        }
    };

    rsx! {
        section { class: "game-section", id: "game",
            div { class: "container",
                h2 { class: "section-title", "Guess & Win" }
                p { class: "section-lede",
                    "Guess the lucky number between 1 and 10 and this week's featured pressing ships free."
                }

                div { class: "game-card card",
                    form { novalidate: true, class: "guess-row", onsubmit: handle_guess,
                        input {
                            class: "form-input guess-input",
                            r#type: "number",
                            min: "1",
                            max: "10",
                            placeholder: "Your guess",
                            value: "{guess_signal()}",
                            oninput: move |evt| guess_signal.set(evt.value()),
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Try Your Luck" }
                    }

                    if let Some((message, won)) = result_signal() {
                        p { class: if won { "game-result success" } else { "game-result error" }, "{message}" }
                    }
                }
            }
        }
    }
}
