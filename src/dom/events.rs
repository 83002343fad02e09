// ============================================================================
// EVENT HANDLING - Listeners de click
// ============================================================================
// Los closures se registran con forget(): cuando el elemento sale del DOM el
// navegador limpia sus listeners, así que no se acumulan para listeners
// locales. Listeners sobre window/document se registran una sola vez.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Registrar un handler de click sobre un elemento
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
