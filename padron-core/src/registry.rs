//! Registry entities and the generic CRUD descriptor.
//!
//! The original schema grew one handler set per table even though every
//! table follows the same list/create/get/delete contract. Here the contract
//! lives once: [`RegistryEntity`] describes a table (name, id column, insert
//! columns, response messages) and the shared repository and handlers are
//! instantiated per entity.

use serde::{Deserialize, Serialize};

/// Single-statement insert under construction; drafts bind their values
/// onto it in `INSERT_COLUMNS` order.
pub type InsertQuery<'q> =
    sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>;

/// A table the generic registry component can operate on.
pub trait RegistryEntity:
    for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>
    + Serialize
    + Send
    + Sync
    + Unpin
    + 'static
{
    /// Wire payload for create. Fields are optional so presence is checked
    /// by [`EntityDraft::is_complete`] and answered with the API's own
    /// validation message, not a deserialization rejection.
    type Draft: EntityDraft + serde::de::DeserializeOwned + Send + 'static;

    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    /// Full column list for selects, id first.
    const COLUMNS: &'static [&'static str];
    /// Columns bound on insert, in [`EntityDraft::bind_insert`] order.
    const INSERT_COLUMNS: &'static [&'static str];

    const MSG_CREATED: &'static str;
    const MSG_DELETED: &'static str;
    const MSG_NOT_FOUND: &'static str;
    const MSG_MISSING_FIELDS: &'static str;
}

/// Create-payload behavior shared by all registry entities.
pub trait EntityDraft {
    /// Presence check: every required field present and, for strings,
    /// non-blank.
    fn is_complete(&self) -> bool;

    /// Bind the insert values in `INSERT_COLUMNS` order. Only called on
    /// drafts that passed [`EntityDraft::is_complete`].
    fn bind_insert(self, query: InsertQuery<'_>) -> InsertQuery<'_>;
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.trim().is_empty())
}

/// Row of the `clientes` table.
///
/// Province/city linkage is carried as plain foreign-key values; the API
/// passes them through without cross-table validation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    pub id_cliente: i64,
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
    pub id_provincia: i64,
    pub id_ciudad: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientDraft {
    pub nombre: Option<String>,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub id_provincia: Option<i64>,
    /// Client ids are caller-supplied, not generated.
    pub id_cliente: Option<i64>,
    pub id_ciudad: Option<i64>,
}

impl RegistryEntity for Client {
    type Draft = ClientDraft;

    const TABLE: &'static str = "clientes";
    const ID_COLUMN: &'static str = "id_cliente";
    const COLUMNS: &'static [&'static str] = &[
        "id_cliente",
        "nombre",
        "correo",
        "telefono",
        "id_provincia",
        "id_ciudad",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "nombre",
        "correo",
        "telefono",
        "id_provincia",
        "id_cliente",
        "id_ciudad",
    ];

    const MSG_CREATED: &'static str = "Cliente creado con éxito";
    const MSG_DELETED: &'static str = "Cliente eliminado con éxito";
    const MSG_NOT_FOUND: &'static str = "Cliente no encontrado";
    const MSG_MISSING_FIELDS: &'static str = "Todos los campos son obligatorios";
}

impl EntityDraft for ClientDraft {
    fn is_complete(&self) -> bool {
        present(&self.nombre)
            && present(&self.correo)
            && present(&self.telefono)
            && self.id_provincia.is_some()
            && self.id_cliente.is_some()
            && self.id_ciudad.is_some()
    }

    fn bind_insert(self, query: InsertQuery<'_>) -> InsertQuery<'_> {
        query
            .bind(self.nombre)
            .bind(self.correo)
            .bind(self.telefono)
            .bind(self.id_provincia)
            .bind(self.id_cliente)
            .bind(self.id_ciudad)
    }
}

/// Row of the `provincia` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Province {
    pub id_provincia: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvinceDraft {
    pub nombre: Option<String>,
}

impl RegistryEntity for Province {
    type Draft = ProvinceDraft;

    const TABLE: &'static str = "provincia";
    const ID_COLUMN: &'static str = "id_provincia";
    const COLUMNS: &'static [&'static str] = &["id_provincia", "nombre"];
    const INSERT_COLUMNS: &'static [&'static str] = &["nombre"];

    const MSG_CREATED: &'static str = "Provincia creada con éxito";
    const MSG_DELETED: &'static str = "Provincia eliminada con éxito";
    const MSG_NOT_FOUND: &'static str = "Provincia no encontrada";
    const MSG_MISSING_FIELDS: &'static str = "El nombre es obligatorio";
}

impl EntityDraft for ProvinceDraft {
    fn is_complete(&self) -> bool {
        present(&self.nombre)
    }

    fn bind_insert(self, query: InsertQuery<'_>) -> InsertQuery<'_> {
        query.bind(self.nombre)
    }
}

/// Row of the `ciudad` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct City {
    pub id_ciudad: i64,
    pub nombre: String,
    pub id_provincia: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityDraft {
    pub nombre: Option<String>,
    pub id_provincia: Option<i64>,
}

impl RegistryEntity for City {
    type Draft = CityDraft;

    const TABLE: &'static str = "ciudad";
    const ID_COLUMN: &'static str = "id_ciudad";
    const COLUMNS: &'static [&'static str] = &["id_ciudad", "nombre", "id_provincia"];
    const INSERT_COLUMNS: &'static [&'static str] = &["nombre", "id_provincia"];

    const MSG_CREATED: &'static str = "Ciudad creada con éxito";
    const MSG_DELETED: &'static str = "Ciudad eliminada con éxito";
    const MSG_NOT_FOUND: &'static str = "Ciudad no encontrada";
    const MSG_MISSING_FIELDS: &'static str = "Todos los campos son obligatorios";
}

impl EntityDraft for CityDraft {
    fn is_complete(&self) -> bool {
        present(&self.nombre) && self.id_provincia.is_some()
    }

    fn bind_insert(self, query: InsertQuery<'_>) -> InsertQuery<'_> {
        query.bind(self.nombre).bind(self.id_provincia)
    }
}

/// Row of the `departamento` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Department {
    pub id_departamento: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentDraft {
    pub nombre: Option<String>,
}

impl RegistryEntity for Department {
    type Draft = DepartmentDraft;

    const TABLE: &'static str = "departamento";
    const ID_COLUMN: &'static str = "id_departamento";
    const COLUMNS: &'static [&'static str] = &["id_departamento", "nombre"];
    const INSERT_COLUMNS: &'static [&'static str] = &["nombre"];

    const MSG_CREATED: &'static str = "Departamento creado con éxito";
    const MSG_DELETED: &'static str = "Departamento eliminado con éxito";
    const MSG_NOT_FOUND: &'static str = "Departamento no encontrado";
    const MSG_MISSING_FIELDS: &'static str = "El nombre es obligatorio";
}

impl EntityDraft for DepartmentDraft {
    fn is_complete(&self) -> bool {
        present(&self.nombre)
    }

    fn bind_insert(self, query: InsertQuery<'_>) -> InsertQuery<'_> {
        query.bind(self.nombre)
    }
}
