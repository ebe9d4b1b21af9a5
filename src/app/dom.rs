use leptos::prelude::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::{
    navigator::ScrollTarget,
    sections::{AnchorLookup, Rect, SectionId},
};

/// Section anchors in the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentAnchors;

impl DocumentAnchors {
    fn element(id: SectionId) -> Option<Element> {
        document().get_element_by_id(id.anchor())
    }
}

impl AnchorLookup for DocumentAnchors {
    fn bounding_rect(&self, id: SectionId) -> Option<Rect> {
        let rect = Self::element(id)?.get_bounding_client_rect();
        Some(Rect {
            top: rect.top(),
            bottom: rect.bottom(),
            left: rect.left(),
            right: rect.right(),
            width: rect.width(),
            height: rect.height(),
        })
    }
}

impl ScrollTarget for DocumentAnchors {
    fn scroll_into_view(&self, id: SectionId) -> bool {
        let Some(el) = Self::element(id) else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

/// Downloads `href` as `filename` through a throwaway anchor element.
pub fn trigger_download(href: &str, filename: &str) -> Result<(), JsValue> {
    let link = document()
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    link.set_href(href);
    link.set_download(filename);
    link.click();
    Ok(())
}

pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::warn!("couldn't show alert: {e:?}");
    }
}
