#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{
    ConnectionManager, CustomizeConnection, Error as ConnectionError, Pool, PoolError,
    PooledConnection,
};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;
pub mod models;
pub mod schema;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Per-connection pragmas. SQLite leaves foreign keys off unless asked.
#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, ConnectionError> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), ConnectionError> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(ConnectionError::QueryError)
    }
}

pub fn get_conn(pool: &DbPool) -> Result<Connection, PoolError> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err
    })
}

/// Builds a pool for `database_url` and brings its schema up to date.
pub fn new_pool(database_url: &str) -> Result<DbPool, errors::Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
        .map_err(|err| {
            error!("Failed to create db pool - {}", err.to_string());
            errors::Error::from(err)
        })?;

    run_migrations(&mut *get_conn(&pool)?)?;

    Ok(pool)
}

/// A private in-memory database. The pool holds a single connection so that
/// every checkout sees the same data; callers must return the connection
/// before checking it out again.
pub fn in_memory_pool() -> Result<DbPool, errors::Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)?;

    run_migrations(&mut *get_conn(&pool)?)?;

    Ok(pool)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), errors::Error> {
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|err| {
        error!("Failed to run migrations - {}", err);
        errors::Error::InternalServerError(err.to_string())
    })?;

    for version in applied {
        info!("Applied migration {}", version);
    }

    Ok(())
}
