// ============================================================================
// PRODUCT FORM APP - FILAS DE DETALLES DEL PRODUCTO (RUST PURO)
// ============================================================================
// Widget WASM del formulario de producto del admin: agrega y quita filas
// nombre/valor dentro de #divProductDetails.
//
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica UI (el estado son las filas vivas del DOM)
// - Models: Estructuras compartidas con el backend
// - Dom: Helpers de manipulación DOM
// ============================================================================

pub mod config;
pub mod dom;
pub mod models;
pub mod utils;
pub mod viewmodels;
pub mod views;

use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::viewmodels::DetailsViewModel;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if config.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🧩 Product Form App - widget de detalles ({})", config.environment);

    // Montar: filas existentes del producto + enlace de alta, si la página los trae
    DetailsViewModel::new(config).mount()?;

    Ok(())
}

/// Punto de entrada histórico de la página: agrega la siguiente fila
/// nombre/valor. Los errores se registran, nunca llegan al host.
#[wasm_bindgen(js_name = addNextDetailSection)]
pub fn add_next_detail_section() {
    let vm = DetailsViewModel::new(AppConfig::from_env());
    if let Err(e) = vm.add_next_detail_section() {
        log::error!("❌ No se pudo agregar la fila de detalle: {:?}", e);
    }
}

/// Punto de entrada histórico de la página: quita la fila con el id dado.
/// Un id desconocido no tiene efecto.
#[wasm_bindgen(js_name = removeDetailSectionById)]
pub fn remove_detail_section_by_id(id: String) {
    DetailsViewModel::new(AppConfig::from_env()).remove_detail_section_by_id(&id);
}
