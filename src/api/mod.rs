pub mod filters;
pub mod form;
pub mod page;
pub mod process;

pub use filters::{handle_filters, FiltersResponse, SliderInfo, __path_handle_filters};
pub use form::FilterForm;
pub use page::{handle_app_css, handle_app_js, handle_page};
pub use process::{
    handle_download, handle_process, ErrorResponse, ImagePayload, ProcessResponse,
    __path_handle_download, __path_handle_process,
};
