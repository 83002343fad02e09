use serde::{Deserialize, Serialize};

/// Detalle nombre/valor de un producto, tal como lo maneja el backend al
/// guardar: arreglos paralelos detailIDs / detailNames / detailValues,
/// donde id 0 significa "detalle nuevo".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_payload() {
        let payload = r#"[{"id":7,"name":"RAM","value":"8 GB"},{"name":"Color","value":"Negro"}]"#;
        let details: Vec<ProductDetail> = serde_json::from_str(payload).unwrap();

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].id, 7);
        assert_eq!(details[0].name, "RAM");
        // Sin id en el payload queda 0, igual que una fila nueva
        assert_eq!(details[1].id, 0);
        assert_eq!(details[1].value, "Negro");
    }
}
