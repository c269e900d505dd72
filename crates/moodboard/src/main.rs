use dioxus::prelude::*;
use moodboard_io::MoodboardGenerator;

fn main() {
    dioxus::launch(app);
}

/// Page shell.
///
/// Renders on the client only and mounts a single
/// [`MoodboardGenerator`], which owns all moodboard state.
fn app() -> Element {
    rsx! {
        // Stylesheet copied from site/moodboard.css by build.rs.
        style { dangerous_inner_html: include_str!(env!("MOODBOARD_CSS_PATH")) }

        // Faces for the suggested fonts, so the chips preview them.
        link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        link { rel: "preconnect", href: "https://fonts.gstatic.com", crossorigin: "anonymous" }
        link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Open+Sans&family=Playfair+Display&family=Roboto&display=swap",
        }

        div { class: "page",
            MoodboardGenerator {}
        }
    }
}
