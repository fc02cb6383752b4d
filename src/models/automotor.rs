//! Modelo de Automotor
//!
//! Este módulo contiene el registro de vehículo tal como lo envía el cliente.
//! El cuerpo se guarda sin validar: campos extra, faltantes o con otro tipo
//! se conservan y se devuelven tal cual.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registro de automotor - envoltorio transparente sobre el JSON recibido
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Automotor(Value);

impl Automotor {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Valor crudo del campo `id`, si el registro es un objeto y lo trae
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn marca(&self) -> Option<&str> {
        self.0.get("marca").and_then(Value::as_str)
    }

    pub fn modelo(&self) -> Option<&str> {
        self.0.get("modelo").and_then(Value::as_str)
    }

    pub fn fecha_fabricacion(&self) -> Option<&str> {
        self.0.get("fechaFabricacion").and_then(Value::as_str)
    }

    pub fn cantidad_puertas(&self) -> Option<i64> {
        self.0.get("cantidadPuertas").and_then(Value::as_i64)
    }

    pub fn disponible_venta(&self) -> Option<bool> {
        self.0.get("disponibleVenta").and_then(Value::as_bool)
    }

    /// Verificar si el `id` almacenado coincide con el segmento de ruta pedido.
    ///
    /// - string: igualdad textual exacta con el segmento
    /// - número: igualdad numérica con el segmento parseado como decimal
    /// - booleano: `true` vale 1 y `false` vale 0
    /// - null, arrays, objetos o `id` ausente: nunca coincide
    pub fn matches_id(&self, requested: &str) -> bool {
        match self.id() {
            Some(Value::String(stored)) => stored == requested,
            Some(Value::Number(stored)) => match (stored.as_f64(), parse_requested(requested)) {
                (Some(stored), Some(requested)) => stored == requested,
                _ => false,
            },
            Some(Value::Bool(stored)) => {
                let stored = if *stored { 1.0 } else { 0.0 };
                parse_requested(requested) == Some(stored)
            }
            _ => false,
        }
    }
}

// NaN nunca es igual a nada, así que "NaN" no resuelve ningún registro
fn parse_requested(requested: &str) -> Option<f64> {
    requested.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}
