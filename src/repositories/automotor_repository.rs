//! Repositorio de Automotores en memoria
//!
//! Secuencia ordenada de registros en memoria del proceso. La posición es
//! el único direccionamiento; la búsqueda por ID es un recorrido lineal.

use crate::models::automotor::Automotor;

#[derive(Debug, Default)]
pub struct AutomotorRepository {
    automotores: Vec<Automotor>,
}

impl AutomotorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crear el repositorio con un conjunto inicial de registros
    pub fn with_records(automotores: Vec<Automotor>) -> Self {
        Self { automotores }
    }

    /// Agregar un registro al final de la secuencia
    pub fn append(&mut self, automotor: Automotor) -> &Automotor {
        self.automotores.push(automotor);
        let index = self.automotores.len() - 1;
        log::debug!("💾 Automotor agregado en el indice {}", index);
        &self.automotores[index]
    }

    /// Reemplazar por completo el registro en `index`.
    ///
    /// El índice debe venir de `resolve`; fuera de rango provoca panic.
    pub fn replace_at(&mut self, index: usize, automotor: Automotor) -> Automotor {
        std::mem::replace(&mut self.automotores[index], automotor)
    }

    /// Quitar el registro en `index`, desplazando los siguientes.
    ///
    /// El índice debe venir de `resolve`; fuera de rango provoca panic.
    pub fn remove_at(&mut self, index: usize) -> Automotor {
        self.automotores.remove(index)
    }

    pub fn read_all(&self) -> &[Automotor] {
        &self.automotores
    }

    pub fn len(&self) -> usize {
        self.automotores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.automotores.is_empty()
    }

    /// Buscar el primer registro cuyo `id` coincide con el segmento pedido
    pub fn resolve(&self, id: &str) -> Option<(&Automotor, usize)> {
        let found = self
            .automotores
            .iter()
            .enumerate()
            .find(|(_, automotor)| automotor.matches_id(id))
            .map(|(index, automotor)| (automotor, index));

        match &found {
            Some((_, index)) => log::debug!("🔍 Automotor '{}' encontrado en el indice {}", id, index),
            None => log::debug!("🔍 Automotor '{}' no existe ({} registros)", id, self.len()),
        }
        found
    }
}
