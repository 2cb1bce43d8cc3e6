//! SQLite-backed target store.
//!
//! One flat table per entity type, rows keyed by the legacy primary key.
//! Date columns are TEXT holding the exact legacy rendering (`%Y-%m-%d`);
//! comparison upstream is string-exact, so no date parsing happens here.

use clinicsync_domain::{Owner, OwnerId, Pet, PetId, PetTypeId, Vet, VetId, Visit, VisitId};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::TableGateway;
use crate::row::{OwnerRow, PetRow, RowLookup, VetRow, VisitRow};
use crate::table::Table;

/// Production table gateway backed by SQLite.
pub struct SqliteTableGateway {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTableGateway {
    /// Opens (or creates) a target store at the given path.
    pub fn open(path: impl AsRef<Path>) -> GatewayResult<Self> {
        let conn = Connection::open(path)?;
        let gateway = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        gateway.init_schema()?;
        Ok(gateway)
    }

    /// Opens an in-memory target store (for testing).
    pub fn open_in_memory() -> GatewayResult<Self> {
        let conn = Connection::open_in_memory()?;
        let gateway = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        gateway.init_schema()?;
        Ok(gateway)
    }

    fn init_schema(&self) -> GatewayResult<()> {
        let conn = self.lock()?;
        // Columns are nullable on purpose: a half-written or hand-edited row
        // must surface as Unreadable, not fail the writer that created it.
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS vets (
                id INTEGER PRIMARY KEY,
                first_name TEXT,
                last_name TEXT
            );

            CREATE TABLE IF NOT EXISTS owners (
                id INTEGER PRIMARY KEY,
                first_name TEXT,
                last_name TEXT,
                address TEXT,
                city TEXT,
                telephone TEXT
            );

            CREATE TABLE IF NOT EXISTS pets (
                id INTEGER PRIMARY KEY,
                name TEXT,
                birth_date TEXT,
                type_id INTEGER,
                owner_id INTEGER
            );

            CREATE TABLE IF NOT EXISTS visits (
                id INTEGER PRIMARY KEY,
                pet_id INTEGER,
                visit_date TEXT,
                description TEXT
            );

            CREATE TABLE IF NOT EXISTS types (
                id INTEGER PRIMARY KEY,
                name TEXT
            );
            ",
        )?;
        Ok(())
    }

    fn lock(&self) -> GatewayResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| GatewayError::LockPoisoned)
    }

    fn lookup<T>(
        &self,
        sql: &str,
        id: i64,
        parse: impl FnOnce(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    ) -> RowLookup<T> {
        let conn = match self.lock() {
            Ok(conn) => conn,
            Err(e) => return RowLookup::Unreadable(e.to_string()),
        };
        match conn.query_row(sql, params![id], parse) {
            Ok(row) => RowLookup::Found(row),
            Err(rusqlite::Error::QueryReturnedNoRows) => RowLookup::Absent,
            Err(e) => RowLookup::Unreadable(e.to_string()),
        }
    }
}

impl TableGateway for SqliteTableGateway {
    fn vet_by_id(&self, id: VetId) -> RowLookup<VetRow> {
        self.lookup(
            "SELECT id, first_name, last_name FROM vets WHERE id = ?1",
            id.value(),
            |row| {
                Ok(VetRow {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                })
            },
        )
    }

    fn owner_by_id(&self, id: OwnerId) -> RowLookup<OwnerRow> {
        self.lookup(
            "SELECT id, first_name, last_name, address, city, telephone FROM owners WHERE id = ?1",
            id.value(),
            |row| {
                Ok(OwnerRow {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    address: row.get(3)?,
                    city: row.get(4)?,
                    telephone: row.get(5)?,
                })
            },
        )
    }

    fn pet_by_id(&self, id: PetId) -> RowLookup<PetRow> {
        self.lookup(
            "SELECT id, name, birth_date, type_id, owner_id FROM pets WHERE id = ?1",
            id.value(),
            |row| {
                Ok(PetRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    birth_date: row.get(2)?,
                    type_id: row.get(3)?,
                    owner_id: row.get(4)?,
                })
            },
        )
    }

    fn visit_by_id(&self, id: VisitId) -> RowLookup<VisitRow> {
        self.lookup(
            "SELECT id, pet_id, visit_date, description FROM visits WHERE id = ?1",
            id.value(),
            |row| {
                Ok(VisitRow {
                    id: row.get(0)?,
                    pet_id: row.get(1)?,
                    visit_date: row.get(2)?,
                    description: row.get(3)?,
                })
            },
        )
    }

    fn pet_type_name(&self, id: PetTypeId) -> RowLookup<String> {
        self.lookup(
            "SELECT name FROM types WHERE id = ?1",
            id.value(),
            |row| row.get(0),
        )
    }

    fn delete_by_id(&self, id: i64, table: Table) -> GatewayResult<()> {
        let conn = self.lock()?;
        let deleted = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", table.as_str()),
            params![id],
        )?;
        debug!("Deleted {} row(s) from {} for id {}", deleted, table, id);
        Ok(())
    }

    fn insert_vet(&self, vet: &Vet) -> GatewayResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO vets (id, first_name, last_name) VALUES (?1, ?2, ?3)",
            params![vet.id.value(), vet.first_name, vet.last_name],
        )?;
        debug!("Inserted vet {}", vet.id);
        Ok(())
    }

    fn insert_owner(&self, owner: &Owner) -> GatewayResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO owners (id, first_name, last_name, address, city, telephone)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                owner.id.value(),
                owner.first_name,
                owner.last_name,
                owner.address,
                owner.city,
                owner.telephone,
            ],
        )?;
        debug!("Inserted owner {}", owner.id);
        Ok(())
    }

    fn insert_pet(&self, pet: &Pet) -> GatewayResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO types (id, name) VALUES (?1, ?2)",
            params![pet.pet_type.id.value(), pet.pet_type.name],
        )?;
        conn.execute(
            "INSERT OR REPLACE INTO pets (id, name, birth_date, type_id, owner_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                pet.id.value(),
                pet.name,
                pet.birth_date.to_string(),
                pet.pet_type.id.value(),
                pet.owner_id.value(),
            ],
        )?;
        debug!("Inserted pet {} (type {})", pet.id, pet.pet_type.name);
        Ok(())
    }

    fn insert_visit(&self, visit: &Visit) -> GatewayResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO visits (id, pet_id, visit_date, description)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                visit.id.value(),
                visit.pet_id.value(),
                visit.date.to_string(),
                visit.description,
            ],
        )?;
        debug!("Inserted visit {}", visit.id);
        Ok(())
    }
}
