use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlInputElement, KeyboardEvent};

use crate::{
    config::UiConfig,
    error::AppResult,
    highlight::bind_row_highlight,
    notice::{notify, EMPTY_QUERY_NOTICE, SEARCH_FAILED_NOTICE},
    query::SearchQuery,
    render::render_into_page,
    search::{GlooTransport, SearchDispatcher, SearchOutcome, SearchTransport},
    selectors::{SEARCH_BUTTON_SELECTOR, SEARCH_INPUT_SELECTOR},
};

/// Owns every listener registered by [`bind_page`]. Dropping it unbinds the
/// page again; call [`PageBindings::forget`] to keep them for the page lifetime.
#[must_use = "listeners are removed when PageBindings is dropped"]
#[derive(Debug)]
pub struct PageBindings {
    listeners: Vec<EventListener>,
    rows: usize,
    search_inputs: usize,
}

impl PageBindings {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn search_inputs(&self) -> usize {
        self.search_inputs
    }

    pub fn forget(self) {
        self.listeners.into_iter().for_each(EventListener::forget);
    }
}

/// Binds row highlighting and the global search boxes of an already parsed
/// document. Elements added later are left alone.
pub fn bind_page(document: &Document, config: &UiConfig) -> AppResult<PageBindings> {
    bind_page_with(document, config, GlooTransport)
}

pub fn bind_page_with<T>(document: &Document, config: &UiConfig, transport: T) -> AppResult<PageBindings>
where
    T: SearchTransport + Clone + 'static,
{
    let mut listeners = bind_row_highlight(document)?;
    let rows = listeners.len();

    let inputs = document.query_selector_all(SEARCH_INPUT_SELECTOR)?;
    let mut search_inputs = 0;
    for index in 0..inputs.length() {
        let Some(input) = inputs
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        let search_box = Rc::new(SearchBox {
            document: document.clone(),
            input: input.clone(),
            dispatcher: SearchDispatcher::new(transport.clone(), config.discard_stale_responses),
            config: config.clone(),
        });

        let button = input
            .parent_element()
            .and_then(|parent| parent.query_selector(SEARCH_BUTTON_SELECTOR).ok().flatten());
        if let Some(button) = button {
            let search_box = search_box.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                trigger(&search_box)
            }));
        }
        listeners.push(EventListener::new(&input, "keydown", move |event| {
            let enter = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Enter");
            if enter {
                trigger(&search_box);
            }
        }));
        search_inputs += 1;
    }

    log::info!("UI loaded: {rows} table rows, {search_inputs} search inputs");
    Ok(PageBindings {
        listeners,
        rows,
        search_inputs,
    })
}

struct SearchBox<T> {
    document: Document,
    input: HtmlInputElement,
    dispatcher: SearchDispatcher<T>,
    config: UiConfig,
}

fn trigger<T: SearchTransport + 'static>(search_box: &Rc<SearchBox<T>>) {
    let query = match SearchQuery::parse(&search_box.input.value()) {
        Ok(query) => query,
        Err(_) => {
            notify(&search_box.document, EMPTY_QUERY_NOTICE, search_box.config.notice_timing());
            return;
        }
    };
    let search_box = search_box.clone();
    spawn_local(async move {
        let outcome = search_box.dispatcher.send(&query).await;
        search_box.apply(outcome);
    });
}

impl<T> SearchBox<T> {
    fn apply(&self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Results(response) => {
                if let Some(error) = &response.error {
                    log::warn!("search backend reported: {error}");
                }
                if let Err(e) = render_into_page(&self.document, &response, self.config.markup()) {
                    log::error!("Unable to render search results: {e}");
                }
            }
            SearchOutcome::Failed(e) => {
                log::error!("Search failed: {e}");
                notify(&self.document, SEARCH_FAILED_NOTICE, self.config.notice_timing());
            }
            SearchOutcome::Superseded => {}
        }
    }
}
