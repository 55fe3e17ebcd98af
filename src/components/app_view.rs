//! Defines the application's routes.

use dioxus::prelude::*;

use crate::components::views::{GeneratorView, ModelsView};
use crate::components::AppShell;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        GeneratorView {},
        #[route("/models")]
        ModelsView {},
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::GeneratorView {} => "Studio",
        AppView::ModelsView {} => "Models",
    }
}
