/// Valor del input oculto detailIDs en filas recién creadas.
/// El backend interpreta 0 como "detalle nuevo" al guardar el producto.
pub const NEW_DETAIL_ID: &str = "0";
