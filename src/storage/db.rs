use postgres::{Client, NoTls};
use rusqlite::Connection;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::StoreError;

/// Conexión al catálogo de cursos: SQLite (archivo local) o Postgres.
/// Para Postgres guardamos la URL y cada operación abre su propio cliente
/// en un hilo dedicado, así el cliente síncrono nunca corre dentro del
/// runtime de actix.
#[derive(Clone)]
pub enum CourseStore {
    Sqlite(PathBuf),
    /// Contiene la URL completa (postgres://...)
    Postgres(String),
}

impl fmt::Debug for CourseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseStore::Sqlite(p) => write!(f, "CourseStore::Sqlite({})", p.display()),
            CourseStore::Postgres(_) => write!(f, "CourseStore::Postgres(..)"),
        }
    }
}

const SQLITE_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS courses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nama_mk TEXT NOT NULL,
        jurusan TEXT NOT NULL,
        fakultas TEXT NOT NULL,
        jumlah_sks INTEGER NOT NULL,
        semester_min INTEGER NOT NULL,
        prediksi_nilai TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_courses_scope ON courses (jurusan, fakultas);";

const POSTGRES_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS courses (
        id BIGSERIAL PRIMARY KEY,
        nama_mk TEXT NOT NULL,
        jurusan TEXT NOT NULL,
        fakultas TEXT NOT NULL,
        jumlah_sks INTEGER NOT NULL,
        semester_min INTEGER NOT NULL,
        prediksi_nilai TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_courses_scope ON courses (jurusan, fakultas);";

impl CourseStore {
    /// Acepta `sqlite://`, `file://`, `postgres://`, `postgresql://` o una
    /// ruta plana (SQLite).
    pub fn from_url(url: &str) -> Result<Self, StoreError> {
        let url = url.trim();
        if let Some(path) = url.strip_prefix("sqlite://") {
            Ok(CourseStore::Sqlite(PathBuf::from(path)))
        } else if let Some(path) = url.strip_prefix("file://") {
            Ok(CourseStore::Sqlite(PathBuf::from(path)))
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(CourseStore::Postgres(url.to_string()))
        } else if url.contains("://") {
            Err(StoreError::UnsupportedScheme(url.to_string()))
        } else {
            Ok(CourseStore::Sqlite(PathBuf::from(url)))
        }
    }

    pub fn sqlite<P: AsRef<Path>>(path: P) -> Self {
        CourseStore::Sqlite(path.as_ref().to_path_buf())
    }

    /// Crea el directorio del archivo SQLite si hace falta y asegura la tabla.
    pub fn init_schema(&self) -> Result<(), StoreError> {
        match self {
            CourseStore::Sqlite(path) => {
                if let Some(dir) = path.parent() {
                    if !dir.as_os_str().is_empty() && !dir.exists() {
                        fs::create_dir_all(dir)?;
                    }
                }
                let conn = Connection::open(path)?;
                conn.execute_batch(SQLITE_SCHEMA)?;
                info!(path = %path.display(), "sqlite course catalog ready");
                Ok(())
            }
            CourseStore::Postgres(url) => {
                with_postgres(url, |client| {
                    client.batch_execute(POSTGRES_SCHEMA)?;
                    Ok(())
                })?;
                info!("postgres course catalog ready");
                Ok(())
            }
        }
    }
}

/// Conexión corta a SQLite para una sola operación.
pub(crate) fn open_sqlite(path: &Path) -> Result<Connection, StoreError> {
    Ok(Connection::open(path)?)
}

/// Ejecuta `op` con un cliente Postgres nuevo en un hilo aparte.
pub(crate) fn with_postgres<T, F>(url: &str, op: F) -> Result<T, StoreError>
where
    T: Send + 'static,
    F: FnOnce(&mut Client) -> Result<T, StoreError> + Send + 'static,
{
    let url = url.to_string();
    let handle = std::thread::spawn(move || -> Result<T, StoreError> {
        let mut client = Client::connect(&url, NoTls)?;
        op(&mut client)
    });
    match handle.join() {
        Ok(res) => res,
        Err(_) => Err(StoreError::WorkerPanicked),
    }
}
