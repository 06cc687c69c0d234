use dioxus::prelude::*;

use crate::infra::map::static_map::MapView;

#[component]
pub fn MapPanel(view: MapView) -> Element {
    rsx! {
        div {
            style: "border: 1px solid #ddd; border-radius: 8px; background: #f3f4f6; min-height: 300px; display: flex; align-items: center; justify-content: center; overflow: hidden;",
            match view {
                MapView::Placeholder(message) => rsx! {
                    p { style: "color: #6b7280;", "{message}" }
                },
                MapView::Image { url } => rsx! {
                    img { src: "{url}", alt: "Carte", style: "width: 100%; height: auto;" }
                },
            }
        }
    }
}
