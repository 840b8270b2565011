//! Quick search over contents of one resource kind. The per-kind search form
//! comes from the registry; hits are rendered through the kind's read
//! component.

use api::{ResourceKind, SearchHit};
use dioxus::prelude::*;
use ui::registry;
use ui::{use_api, use_locale, Debouncer, QuickSearcher, SEARCH_DEBOUNCE};

#[component]
pub fn Search() -> Element {
    let client = use_api();
    let locale = use_locale();
    let mut kind = use_signal(|| ResourceKind::PlainText);
    let query = use_signal(String::new);
    let mut hits = use_signal(Vec::<SearchHit>::new);
    let mut searching = use_signal(|| false);
    let mut error = use_signal(|| false);
    let debouncer = use_hook(Debouncer::new);
    let searcher = use_hook(|| QuickSearcher::new(client));

    use_effect(move || {
        let q = query();
        let k = kind();
        let debouncer = debouncer.clone();
        let searcher = searcher.clone();
        spawn(async move {
            hits.set(Vec::new());
            error.set(false);
            if q.trim().is_empty() {
                // an emptied query dispatches nothing, but whatever is
                // still in flight must not repopulate the cleared list
                searcher.cancel();
                searching.set(false);
                return;
            }
            searching.set(true);
            if !debouncer.wait(SEARCH_DEBOUNCE).await {
                return;
            }
            let Some(outcome) = searcher.run(k, &q).await else {
                return;
            };
            match outcome {
                Ok(found) => {
                    hits.set(found);
                    searching.set(false);
                }
                Err(e) => {
                    tracing::error!("quick search failed: {e}");
                    error.set(true);
                    searching.set(false);
                }
            }
        });
    });

    let caps = registry::capabilities(kind());
    let profile = locale().profile;
    let loading_label = profile.translate("general.loading").to_string();
    let no_results = profile.translate("search.noResults").to_string();

    rsx! {
        div {
            class: "search-view",

            div {
                class: "search-controls",
                select {
                    class: "search-kind-select",
                    onchange: move |e| {
                        if let Some(k) = ResourceKind::from_tag(&e.value()) {
                            kind.set(k);
                        }
                    },
                    for entry in ResourceKind::ALL.map(registry::capabilities) {
                        option {
                            key: "{entry.kind.as_tag()}",
                            value: "{entry.kind.as_tag()}",
                            selected: entry.kind == kind(),
                            "{entry.label}"
                        }
                    }
                }
                {(caps.search_form)(query)}
            }

            if searching() {
                p { "{loading_label}" }
            } else if error() {
                p { class: "search-error", "Search failed." }
            } else if hits().is_empty() && !query().trim().is_empty() {
                p { class: "search-empty", "{no_results}" }
            }

            for hit in hits() {
                div {
                    key: "{hit.content.id}",
                    class: "search-hit",
                    span { class: "search-hit-location", "{hit.location_label}" }
                    {registry::render_content(&hit.content)}
                }
            }
        }
    }
}
