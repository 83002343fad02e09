// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Buscar los elementos cuyo id empieza con el prefijo dado, en orden de
/// documento. Sin document (o selector fallido) devuelve vacío.
pub fn elements_with_id_prefix(prefix: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let selector = format!("[id^='{}']", prefix);
    let Ok(nodes) = doc.query_selector_all(&selector) else {
        return Vec::new();
    };

    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.get(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }
    elements
}

/// Remover un elemento (con todos sus descendientes) por id.
/// Devuelve false si no existe, sin tocar nada.
pub fn remove_element_by_id(id: &str) -> bool {
    match get_element_by_id(id) {
        Some(element) => {
            element.remove();
            true
        }
        None => false,
    }
}

/// Dar foco a un elemento
pub fn focus(element: &Element) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .focus()
}
