// ============================================================================
// REMOVE LINK VIEW - Control para quitar una fila de detalle
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};

/// Renderizar el ícono de quitar fila. El click invoca el callback con el id
/// de la fila objetivo: closure ligado en vez de un id incrustado en el href.
pub fn render_remove_link(
    target_id: &str,
    on_remove: Rc<dyn Fn(String)>,
) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .class("btn fas fa-times-circle fa-2x icon-dark")
        .attr("title", "Remove this detail")?
        .build();

    let id = target_id.to_string();
    on_click(&link, move |_e| {
        on_remove(id.clone());
    })?;

    Ok(link)
}
