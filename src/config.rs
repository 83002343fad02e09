use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub form: FormConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            form: FormConfig::default(),
        }
    }
}

/// Ids y límites del formulario de producto. Son los que el backend y las
/// plantillas del admin ya conocen, por eso viven en config y no sueltos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub container_id: String,
    pub row_id_prefix: String,
    pub add_link_id: String,
    pub seed_script_id: String,
    pub max_input_length: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            container_id: "divProductDetails".to_string(),
            row_id_prefix: "divDetail".to_string(),
            add_link_id: "linkAddDetail".to_string(),
            seed_script_id: "productDetailsData".to_string(),
            max_input_length: 255,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            form: FormConfig {
                max_input_length: option_env!("MAX_DETAIL_INPUT_LENGTH")
                    .unwrap_or("255").parse().unwrap_or(255),
                ..FormConfig::default()
            },
        }
    }
}
