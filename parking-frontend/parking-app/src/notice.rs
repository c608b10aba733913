#[cfg(feature = "hydrate")]
use gloo_timers::future::TimeoutFuture;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::spawn_local;
#[cfg(feature = "hydrate")]
use web_sys::{Document, HtmlElement};

#[cfg(feature = "hydrate")]
use crate::error::{AppError, AppResult};
#[cfg(feature = "hydrate")]
use crate::selectors::{NOTICE_CLASS, NOTICE_VISIBLE_CLASS};

pub const EMPTY_QUERY_NOTICE: &str = "Type a plate or name to search";
pub const SEARCH_FAILED_NOTICE: &str = "Search failed";

/// Lifecycle of a floating notice, in milliseconds from insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeTiming {
    pub show_delay_ms: u32,
    pub visible_ms: u32,
    pub fade_ms: u32,
}

impl NoticeTiming {
    pub fn shown_at(&self) -> u32 {
        self.show_delay_ms
    }

    /// `visible` comes off here. Counted from insertion, not from `shown_at`.
    pub fn hidden_at(&self) -> u32 {
        self.visible_ms
    }

    pub fn removed_at(&self) -> u32 {
        self.visible_ms.saturating_add(self.fade_ms)
    }
}

/// Appends a `.floating-notice` to the body and schedules its own removal.
/// Notices don't know about each other; several can be on screen at once.
#[cfg(feature = "hydrate")]
pub fn show_notice(document: &Document, text: &str, timing: NoticeTiming) -> AppResult<HtmlElement> {
    let body = document
        .body()
        .ok_or_else(|| AppError::Dom("document has no body".to_string()))?;
    let notice = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| AppError::Dom("created div is not an HtmlElement".to_string()))?;
    notice.set_class_name(NOTICE_CLASS);
    notice.set_inner_text(text);
    body.append_child(&notice)?;

    let shown = notice.clone();
    spawn_local(async move {
        TimeoutFuture::new(timing.shown_at()).await;
        _ = shown.class_list().add_1(NOTICE_VISIBLE_CLASS);
    });
    let hidden = notice.clone();
    spawn_local(async move {
        TimeoutFuture::new(timing.hidden_at()).await;
        _ = hidden.class_list().remove_1(NOTICE_VISIBLE_CLASS);
        TimeoutFuture::new(timing.fade_ms).await;
        hidden.remove();
    });
    Ok(notice)
}

/// Fire and forget version for event handlers, failures only get logged.
#[cfg(feature = "hydrate")]
pub(crate) fn notify(document: &Document, text: &str, timing: NoticeTiming) {
    if let Err(e) = show_notice(document, text, timing) {
        log::error!("Unable to show notice {text:?}: {e}");
    }
}
