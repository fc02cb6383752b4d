use serde::Serialize;

use crate::models::automotor::Automotor;

// Response del endpoint raíz
#[derive(Debug, Serialize)]
pub struct ProgramaResponse {
    pub programa: String,
}

impl ProgramaResponse {
    pub fn new(programa: &str) -> Self {
        Self {
            programa: programa.to_string(),
        }
    }
}

// Response de actualización y borrado: descripción + registro afectado
#[derive(Debug, Serialize)]
pub struct ResultadoResponse {
    pub resultado: String,
    pub valor: Automotor,
}

impl ResultadoResponse {
    pub fn actualizado(index: usize, valor: Automotor) -> Self {
        Self {
            resultado: format!("Actualización según el indice: {}", index),
            valor,
        }
    }

    pub fn borrado(index: usize, valor: Automotor) -> Self {
        Self {
            resultado: format!("Borrado según el indice: {}", index),
            valor,
        }
    }
}
