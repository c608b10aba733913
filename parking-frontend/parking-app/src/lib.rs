//! Page glue for the parking management site: row highlighting, the global
//! plate/name search and the floating notices. The pages themselves are
//! rendered by the backend; this crate only enhances them.

mod config;
mod error;
mod query;
mod search;
mod sequence;

pub mod notice;
pub mod render;
pub mod selectors;

pub use config::UiConfig;
pub use error::{AppError, AppResult, SystemError};
pub use notice::NoticeTiming;
pub use query::{SearchQuery, SEARCH_PATH};
pub use render::{render_results, Markup};
pub use search::{SearchDispatcher, SearchOutcome, SearchTransport};
pub use sequence::{RequestSequence, Ticket};

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        mod bindings;
        mod highlight;

        pub use bindings::{bind_page, bind_page_with, PageBindings};
        pub use notice::show_notice;
        pub use render::{render_into_page, results_container};
        pub use search::GlooTransport;
    }
}
