use rusqlite::{params, Connection, ErrorCode};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::data::{parse_float_or_none, Record, RecordInput};
use super::error::{LibraryError, LibraryResult};

const TABLE: &str = "pokemon";

/// Column added after the first release; older databases lack it
const IMAGE_COLUMN: &str = "image_path";

/// Outcome of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The row was removed (carries the affected-row count)
    Deleted(usize),
    /// The user declined the confirmation
    Cancelled,
}

/// The Library manages the SQLite catalog database.
///
/// No connection is held between calls: every operation opens the
/// database file, runs one statement in a transaction, commits and
/// drops the connection again.
pub struct Library {
    db_path: PathBuf,
}

impl Library {
    /// Open the catalog in the user's data directory and make sure the
    /// schema is current.
    ///
    /// - Linux: ~/.local/share/pokedex/pokemon.db
    /// - macOS: ~/Library/Application Support/pokedex/pokemon.db
    /// - Windows: %APPDATA%\pokedex\pokemon.db
    pub fn new() -> LibraryResult<Self> {
        Self::open(Self::default_path())
    }

    /// Open the catalog stored at `db_path`, creating the file and its
    /// parent directory if needed.
    pub fn open(db_path: impl Into<PathBuf>) -> LibraryResult<Self> {
        let library = Self::at(db_path);

        if let Some(parent) = library.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        library.ensure_schema()?;
        info!("📁 Catalog opened at {}", library.db_path.display());

        Ok(library)
    }

    /// Point at a database file without touching it
    pub(crate) fn at(db_path: impl Into<PathBuf>) -> Self {
        Library {
            db_path: db_path.into(),
        }
    }

    fn default_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        path.push("pokedex");
        path.push("pokemon.db");
        path
    }

    /// Get the path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Open a fresh connection. It is closed when dropped, on every
    /// exit path of the caller.
    fn connect(&self) -> LibraryResult<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Create the table if missing and add the image column to databases
    /// created before it existed. Safe to call repeatedly.
    pub fn ensure_schema(&self) -> LibraryResult<()> {
        {
            let conn = self.connect()?;
            // Legacy layout; image_path is added by ensure_image_column
            conn.execute(
                "CREATE TABLE IF NOT EXISTS pokemon (
                    number      INTEGER PRIMARY KEY,
                    name        TEXT NOT NULL,
                    category    TEXT NOT NULL,
                    description TEXT,
                    weight      REAL,
                    height      REAL
                )",
                [],
            )?;
        }

        self.ensure_image_column()?;
        debug!("Schema ready");
        Ok(())
    }

    fn ensure_image_column(&self) -> LibraryResult<()> {
        let conn = self.connect()?;

        if column_names(&conn, TABLE)?.iter().any(|c| c == IMAGE_COLUMN) {
            return Ok(());
        }

        conn.execute("ALTER TABLE pokemon ADD COLUMN image_path TEXT", [])?;
        info!("🔧 Added missing {} column to {}", IMAGE_COLUMN, TABLE);
        Ok(())
    }

    /// Insert a new Pokémon.
    ///
    /// Number, name and category are required. Weight and height are
    /// stored as NULL when empty or not numeric.
    pub fn create(&self, input: &RecordInput) -> LibraryResult<Record> {
        let number = input.number.trim();
        let name = input.name.trim();
        let category = input.category.trim();

        if number.is_empty() || name.is_empty() || category.is_empty() {
            return Err(LibraryError::Validation(
                "Number, Name and Type are required!".to_string(),
            ));
        }

        let record = Record {
            number: parse_number(number)?,
            name: name.to_string(),
            category: category.to_string(),
            description: input.description.trim().to_string(),
            weight: parse_float_or_none(&input.weight),
            height: parse_float_or_none(&input.height),
            image_path: non_empty(&input.image_path),
        };

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let result = tx.execute(
            "INSERT INTO pokemon (number, name, category, description, weight, height, image_path)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.number,
                record.name,
                record.category,
                record.description,
                record.weight,
                record.height,
                record.image_path,
            ],
        );

        match result {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                debug!("Rejected duplicate number {}", record.number);
                return Err(LibraryError::DuplicateKey(record.number));
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit()?;
        info!("➕ Inserted #{} {}", record.number, record.name);

        Ok(record)
    }

    /// Get every Pokémon in the order SQLite returns them.
    ///
    /// Works on legacy tables without the image column: those rows come
    /// back with `image_path` set to None.
    pub fn list_all(&self) -> LibraryResult<Vec<Record>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT * FROM pokemon")?;
        let has_image = stmt.column_count() > 6;

        let rows = stmt.query_map([], |row| {
            Ok(Record {
                number: row.get(0)?,
                name: row.get(1)?,
                category: row.get(2)?,
                description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                weight: row.get(4)?,
                height: row.get(5)?,
                image_path: if has_image { row.get(6)? } else { None },
            })
        })?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }

        debug!("Listed {} records", records.len());
        Ok(records)
    }

    /// Overwrite every field except the number of an existing Pokémon.
    ///
    /// An empty number means nothing is selected. The affected-row count
    /// is returned but a missing row is not treated as an error.
    pub fn update(&self, input: &RecordInput) -> LibraryResult<usize> {
        let number = input.number.trim();
        if number.is_empty() {
            return Err(LibraryError::SelectionRequired("update"));
        }
        let number = parse_number(number)?;

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let changed = tx.execute(
            "UPDATE pokemon
             SET name = ?1, category = ?2, description = ?3, weight = ?4, height = ?5, image_path = ?6
             WHERE number = ?7",
            params![
                input.name.trim(),
                input.category.trim(),
                input.description.trim(),
                parse_float_or_none(&input.weight),
                parse_float_or_none(&input.height),
                non_empty(&input.image_path),
                number,
            ],
        )?;
        tx.commit()?;

        info!("✏️  Updated #{} ({} row(s) matched)", number, changed);
        Ok(changed)
    }

    /// Delete the selected Pokémon after `confirm` approves it.
    ///
    /// `number` is None when nothing is selected.
    pub fn delete(
        &self,
        number: Option<i64>,
        confirm: impl FnOnce(i64) -> bool,
    ) -> LibraryResult<Deletion> {
        let number = number.ok_or(LibraryError::SelectionRequired("delete"))?;

        if !confirm(number) {
            debug!("Delete of #{} cancelled", number);
            return Ok(Deletion::Cancelled);
        }

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let removed = tx.execute("DELETE FROM pokemon WHERE number = ?1", params![number])?;
        tx.commit()?;

        info!("🗑️  Deleted #{}", number);
        Ok(Deletion::Deleted(removed))
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("db_path", &self.db_path)
            .finish()
    }
}

/// Live column names of `table`
fn column_names(conn: &Connection, table: &str) -> LibraryResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}

fn parse_number(number: &str) -> LibraryResult<i64> {
    number.parse().map_err(|_| {
        LibraryError::Validation(format!("Number must be a whole number, got \"{number}\"."))
    })
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
