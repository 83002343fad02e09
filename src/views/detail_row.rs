// ============================================================================
// DETAIL ROW VIEW - Una fila nombre/valor del formulario de producto
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::FormConfig;
use crate::dom::ElementBuilder;
use crate::models::ProductDetail;
use crate::utils::NEW_DETAIL_ID;

/// Id de la fila en la posición dada
pub fn detail_row_id(prefix: &str, index: usize) -> String {
    format!("{}{}", prefix, index)
}

/// Renderizar la fila `divDetail<index>`: el input oculto con el id del
/// detalle (0 para filas nuevas) más los pares label/input de nombre y valor.
/// Con `detail` presente los inputs salen precargados (producto en edición).
pub fn render_detail_row(
    index: usize,
    detail: Option<&ProductDetail>,
    config: &FormConfig,
) -> Result<Element, JsValue> {
    let max_length = config.max_input_length.to_string();

    let detail_id = detail
        .map(|d| d.id.to_string())
        .unwrap_or_else(|| NEW_DETAIL_ID.to_string());
    let hidden_id = ElementBuilder::new("input")?
        .attr("type", "hidden")?
        .attr("name", "detailIDs")?
        .attr("value", &detail_id)?
        .build();

    let name_label = ElementBuilder::new("label")?
        .class("m-3")
        .text("Name:")
        .build();

    let mut name_input = ElementBuilder::new("input")?
        .class("form-control w-25")
        .attr("type", "text")?
        .attr("name", "detailNames")?
        .attr("maxlength", &max_length)?;
    if let Some(detail) = detail {
        name_input = name_input.attr("value", &detail.name)?;
    }

    let value_label = ElementBuilder::new("label")?
        .class("m-3")
        .text("Value:")
        .build();

    let mut value_input = ElementBuilder::new("input")?
        .class("form-control w-25")
        .attr("type", "text")?
        .attr("name", "detailValues")?
        .attr("maxlength", &max_length)?;
    if let Some(detail) = detail {
        value_input = value_input.attr("value", &detail.value)?;
    }

    let row = ElementBuilder::new("div")?
        .class("form-inline")
        .id(&detail_row_id(&config.row_id_prefix, index))?
        .child(hidden_id)?
        .child(name_label)?
        .child(name_input.build())?
        .child(value_label)?
        .child(value_input.build())?
        .build();

    Ok(row)
}
