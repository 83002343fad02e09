// ============================================================================
// DETAILS VIEWMODEL - Lógica de las filas de detalles del producto
// ============================================================================
// El estado son las filas vivas del DOM: la cantidad se recalcula en cada
// operación contando los elementos con el prefijo de id, nunca con un
// contador propio. Quitar una fila intermedia no renumera las restantes, así
// que después de un borrado el índice derivado puede repetir un id existente.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::{
    append_child, elements_with_id_prefix, focus, get_element_by_id, on_click,
    remove_element_by_id,
};
use crate::models::ProductDetail;
use crate::views::{render_detail_row, render_remove_link};

pub struct DetailsViewModel {
    config: AppConfig,
}

impl DetailsViewModel {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Montar el widget sobre la página actual: renderiza las filas del
    /// producto en edición (si el servidor embebió el payload) y liga el
    /// enlace de alta (si existe).
    pub fn mount(&self) -> Result<(), JsValue> {
        self.seed_existing_details()?;
        self.bind_add_link()?;
        Ok(())
    }

    /// Agregar la siguiente fila nombre/valor al contenedor de detalles.
    pub fn add_next_detail_section(&self) -> Result<(), JsValue> {
        let form = &self.config.form;

        let Some(container) = get_element_by_id(&form.container_id) else {
            // Página sin sección de detalles: no hay nada que hacer
            log::debug!("Contenedor #{} ausente, se ignora el alta", form.container_id);
            return Ok(());
        };

        // Snapshot ANTES de insertar: fija el índice de la fila nueva y cuál
        // era la última hasta ahora
        let existing = elements_with_id_prefix(&form.row_id_prefix);

        let row = render_detail_row(existing.len(), None, form)?;
        append_child(&container, &row)?;

        // La fila que deja de ser última recibe recién ahora su control de
        // quitar; la recién creada queda sin control hasta el próximo alta
        if let Some(previous_last) = existing.last() {
            self.attach_remove_link(previous_last)?;
        }

        if let Some(name_input) = row.query_selector("input[name='detailNames']")? {
            focus(&name_input)?;
        }

        log::info!("➕ Fila de detalle agregada ({} en total)", existing.len() + 1);
        Ok(())
    }

    /// Quitar una fila (con todo su contenido) por id. Id desconocido: no-op.
    pub fn remove_detail_section_by_id(&self, id: &str) {
        if remove_element_by_id(id) {
            log::info!("🗑️ Fila de detalle {} eliminada", id);
        } else {
            log::debug!("Fila {} inexistente, se ignora", id);
        }
    }

    /// Renderizar las filas de un producto existente desde el payload JSON
    /// que el servidor embebe en la página de edición.
    fn seed_existing_details(&self) -> Result<(), JsValue> {
        let form = &self.config.form;

        let Some(container) = get_element_by_id(&form.container_id) else {
            return Ok(());
        };
        let Some(script) = get_element_by_id(&form.seed_script_id) else {
            return Ok(());
        };

        let payload = script.text_content().unwrap_or_default();
        let details: Vec<ProductDetail> = match serde_json::from_str(&payload) {
            Ok(details) => details,
            Err(e) => {
                log::warn!("⚠️ Payload de detalles ilegible, se omite la carga: {}", e);
                return Ok(());
            }
        };

        for (index, detail) in details.iter().enumerate() {
            let row = render_detail_row(index, Some(detail), form)?;
            append_child(&container, &row)?;
        }

        // Mismo criterio que en las altas: todas menos la última llevan
        // control de quitar
        let rows = elements_with_id_prefix(&form.row_id_prefix);
        for row in rows.iter().take(rows.len().saturating_sub(1)) {
            self.attach_remove_link(row)?;
        }

        if !details.is_empty() {
            log::info!("📋 {} detalles existentes renderizados", details.len());
        }
        Ok(())
    }

    /// Ligar el alta al enlace de la página, si existe
    fn bind_add_link(&self) -> Result<(), JsValue> {
        let Some(link) = get_element_by_id(&self.config.form.add_link_id) else {
            return Ok(());
        };

        let config = self.config.clone();
        on_click(&link, move |_e| {
            let vm = DetailsViewModel::new(config.clone());
            if let Err(e) = vm.add_next_detail_section() {
                log::error!("❌ No se pudo agregar la fila de detalle: {:?}", e);
            }
        })?;
        Ok(())
    }

    fn attach_remove_link(&self, row: &Element) -> Result<(), JsValue> {
        let config = self.config.clone();
        let on_remove: Rc<dyn Fn(String)> = Rc::new(move |id: String| {
            DetailsViewModel::new(config.clone()).remove_detail_section_by_id(&id);
        });

        let link = render_remove_link(&row.id(), on_remove)?;
        append_child(row, &link)?;
        Ok(())
    }
}
