use dynform_core::{
    async_trait,
    driver::{
        operation::{GetByKey, Insert, Operation},
        Driver, Response,
    },
    err, Error, Record, RecordId, Result,
};
use rusqlite::{Connection, OptionalExtension};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};
use url::Url;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS records (
    list TEXT NOT NULL,
    id INTEGER NOT NULL,
    body TEXT NOT NULL,
    PRIMARY KEY (list, id)
)";

#[derive(Debug)]
pub enum Location {
    File(PathBuf),
    InMemory,
}

/// A record store backed by one SQLite table. Record bodies are stored as
/// JSON.
#[derive(Debug)]
pub struct Sqlite {
    location: Location,
    connection: Mutex<Connection>,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Self::init(Location::InMemory, connection)
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection = Connection::open(&path).map_err(Error::driver_operation_failed)?;
        Self::init(Location::File(path), connection)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    fn init(location: Location, connection: Connection) -> Result<Self> {
        connection
            .execute(CREATE_TABLE, [])
            .map_err(Error::driver_operation_failed)?;

        Ok(Sqlite {
            location,
            connection: Mutex::new(connection),
        })
    }

    fn connection(&self) -> MutexGuard<'_, Connection> {
        self.connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match &self.location {
            Location::InMemory => Cow::Borrowed("sqlite::memory:"),
            Location::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        log::trace!(target: "dynform::sqlite", "exec list={}", op.list());

        let mut connection = self.connection();
        match op {
            Operation::Insert(op) => insert(&mut connection, op).map(Response::created),
            Operation::GetByKey(op) => get_by_key(&connection, &op).map(Response::record),
        }
    }

    async fn reset_db(&self) -> Result<()> {
        self.connection()
            .execute("DELETE FROM records", [])
            .map_err(Error::driver_operation_failed)?;
        Ok(())
    }
}

fn insert(connection: &mut Connection, op: Insert) -> Result<RecordId> {
    let body = serde_json::to_string(&op.record).map_err(Error::driver_operation_failed)?;
    let tx = connection
        .transaction()
        .map_err(Error::driver_operation_failed)?;

    let id: i64 = match op.key {
        Some(key) => {
            let id = to_sql_key(key)?;
            let taken = tx
                .query_row(
                    "SELECT 1 FROM records WHERE list = ?1 AND id = ?2",
                    (&op.list, id),
                    |_| Ok(()),
                )
                .optional()
                .map_err(Error::driver_operation_failed)?
                .is_some();
            if taken {
                return Err(err!("record {key} already exists"));
            }
            id
        }
        None => tx
            .query_row(
                "SELECT COALESCE(MAX(id), 0) + 1 FROM records WHERE list = ?1",
                [&op.list],
                |row| row.get(0),
            )
            .map_err(Error::driver_operation_failed)?,
    };

    tx.execute(
        "INSERT INTO records (list, id, body) VALUES (?1, ?2, ?3)",
        (&op.list, id, &body),
    )
    .map_err(Error::driver_operation_failed)?;
    tx.commit().map_err(Error::driver_operation_failed)?;

    from_sql_key(id)
}

fn get_by_key(connection: &Connection, op: &GetByKey) -> Result<Record> {
    let body: Option<String> = connection
        .query_row(
            "SELECT body FROM records WHERE list = ?1 AND id = ?2",
            (&op.list, to_sql_key(op.key)?),
            |row| row.get(0),
        )
        .optional()
        .map_err(Error::driver_operation_failed)?;

    let Some(body) = body else {
        return Err(Error::record_not_found(format!(
            "list={} key={}",
            op.list, op.key
        )));
    };

    serde_json::from_str(&body).map_err(Error::driver_operation_failed)
}

fn to_sql_key(key: RecordId) -> Result<i64> {
    i64::try_from(key.0).map_err(Error::driver_operation_failed)
}

fn from_sql_key(id: i64) -> Result<RecordId> {
    u64::try_from(id)
        .map(RecordId)
        .map_err(Error::driver_operation_failed)
}
