//! Client-facing messages shared by every service.

pub const INTERNAL_ERROR: &str = "Error interno del servidor";
pub const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";
pub const METHOD_NOT_ALLOWED: &str = "Método no permitido";
pub const INVALID_JSON: &str = "El cuerpo de la petición no es JSON válido";
pub const BODY_NOT_OBJECT: &str = "El cuerpo de la petición debe ser un objeto JSON";
pub const BODY_UNREADABLE: &str = "No se pudo leer el cuerpo de la petición";
