use log::debug;
use yew::prelude::*;

use crate::config::CLINIC;
use crate::dom::scroll_to_top;

/// `<title>` text for a page, e.g. `About | Bhasin Dental Clinic`.
pub fn page_title(section: &str) -> String {
    format!("{} | {}", section, CLINIC.name)
}

fn apply(title: &str, description: Option<&str>) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(title);
    if let Some(description) = description {
        if let Ok(Some(tag)) = document.query_selector("meta[name=\"description\"]") {
            let _ = tag.set_attribute("content", description);
        }
    }
}

/// Sets the document title and meta description while the page is mounted,
/// and starts the page at the top.
#[hook]
pub fn use_page_meta(title: String, description: Option<&'static str>) {
    use_effect_with_deps(
        move |(title, description): &(String, Option<&'static str>)| {
            debug!("Page meta: {}", title);
            apply(title, *description);
            scroll_to_top();
            || ()
        },
        (title, description),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_carry_clinic_name() {
        assert_eq!(page_title("Gallery"), "Gallery | Bhasin Dental Clinic");
    }
}
