//! Field rules for every product request.

use axum_helpers::{Check, Constraint, FieldRule, RequestSchema};

use crate::models::{CreateProduct, ProductId, UpdateProduct};

pub const NAME_MAX_LENGTH: u64 = 100;

const ID: &[Check] = &[Check::new(Constraint::Integer, "ID no válido")];

const NAME: &[Check] = &[
    Check::new(
        Constraint::NonEmpty,
        "El Nombre de Producto no puede ir vacio",
    ),
    Check::new(
        Constraint::Length {
            min: 1,
            max: NAME_MAX_LENGTH,
        },
        "El Nombre de Producto no puede superar los 100 caracteres",
    ),
];

const PRICE: &[Check] = &[
    Check::new(Constraint::Numeric, "Valor no válido"),
    Check::new(Constraint::GreaterThan(0.0), "Precio no válido"),
];

const AVAILABILITY: &[Check] = &[Check::new(
    Constraint::Boolean,
    "Valor para disponibilidad no válido",
)];

pub const CREATE_RULES: &[FieldRule] = &[
    FieldRule::body("name", NAME),
    FieldRule::body("price", PRICE),
    FieldRule::body("availability", AVAILABILITY).optional(),
];

pub const UPDATE_RULES: &[FieldRule] = &[
    FieldRule::param("id", ID),
    FieldRule::body("name", NAME),
    FieldRule::body("price", PRICE),
    FieldRule::body("availability", AVAILABILITY),
];

pub const ID_RULES: &[FieldRule] = &[FieldRule::param("id", ID)];

impl RequestSchema for CreateProduct {
    const RULES: &'static [FieldRule] = CREATE_RULES;
}

impl RequestSchema for UpdateProduct {
    const RULES: &'static [FieldRule] = UPDATE_RULES;
}

impl RequestSchema for ProductId {
    const RULES: &'static [FieldRule] = ID_RULES;
}
