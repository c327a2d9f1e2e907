use crate::context::AppContext;
use crate::session::use_session;
use dioxus::prelude::*;

/// Placeholder for every page without a dedicated view: shows which route matched.
#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let path = format!("/{}", segments.join("/"));

    let Some(matched) = ctx.access.gate.table().resolve(&path) else {
        return rsx! {
            section { class: "page missing",
                h1 { "Page not found" }
                code { "{path}" }
            }
        };
    };

    let title = title_case(&matched.definition.page);
    let params: Vec<(String, String)> =
        matched.params.iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect();
    let signed_in = session.read().is_authenticated();

    rsx! {
        section { class: "page",
            if !signed_in {
                nav { class: "public",
                    Link { to: ctx.config.routes.home_path.clone(), "AffiliateHub" }
                    Link { to: ctx.config.routes.login_path.clone(), "Sign in" }
                }
            }
            h1 { "{title}" }
            code { "{matched.definition.pattern}" }
            if !params.is_empty() {
                dl {
                    for (name, value) in params {
                        div { key: "{name}",
                            dt { "{name}" }
                            dd { "{value}" }
                        }
                    }
                }
            }
        }
    }
}

fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
