use dioxus::prelude::*;

use super::Page;

pub fn not_found() -> Page {
    Page::new(
        "Not found",
        None,
        rsx! {
            p { "The requested page does not exist." }
        },
    )
}

pub fn server_error() -> Page {
    Page::new(
        "Server error",
        None,
        rsx! {
            p { "Something went wrong on our side. Please try again later." }
        },
    )
}
