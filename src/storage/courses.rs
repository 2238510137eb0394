//! Operaciones CRUD sobre la tabla `courses`.

use rusqlite::params;
use tracing::debug;

use crate::error::StoreError;
use crate::models::Course;
use crate::storage::db::{open_sqlite, with_postgres, CourseStore};
use crate::storage::import::validate_course;

const SELECT_COLUMNS: &str = "id, nama_mk, jurusan, fakultas, jumlah_sks, semester_min, prediksi_nilai";

fn sqlite_row_to_course(row: &rusqlite::Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        name: row.get(1)?,
        department: row.get(2)?,
        faculty: row.get(3)?,
        credits: row.get(4)?,
        min_semester: row.get(5)?,
        predicted_grade: row.get(6)?,
    })
}

fn pg_row_to_course(row: &postgres::Row) -> Result<Course, postgres::Error> {
    Ok(Course {
        id: row.try_get(0)?,
        name: row.try_get(1)?,
        department: row.try_get(2)?,
        faculty: row.try_get(3)?,
        credits: row.try_get(4)?,
        min_semester: row.try_get(5)?,
        predicted_grade: row.try_get(6)?,
    })
}

fn check_record(course: &Course) -> Result<(), StoreError> {
    let problems = validate_course(course);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(StoreError::InvalidRecord(problems.join(", ")))
    }
}

impl CourseStore {
    /// Todos los cursos, ordenados por id.
    pub fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        let sql = format!("SELECT {} FROM courses ORDER BY id", SELECT_COLUMNS);
        match self {
            CourseStore::Sqlite(path) => {
                let conn = open_sqlite(path)?;
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([], sqlite_row_to_course)?;
                let mut out = Vec::new();
                for r in rows {
                    out.push(r?);
                }
                Ok(out)
            }
            CourseStore::Postgres(url) => with_postgres(url, move |client| {
                let rows = client.query(sql.as_str(), &[])?;
                let mut out = Vec::with_capacity(rows.len());
                for r in rows.iter() {
                    out.push(pg_row_to_course(r)?);
                }
                Ok(out)
            }),
        }
    }

    /// Catálogo de un par (jurusan, fakultas), en orden de id. Este orden es
    /// el que recibe el optimizador.
    pub fn courses_by_department_faculty(&self, department: &str, faculty: &str) -> Result<Vec<Course>, StoreError> {
        let courses = match self {
            CourseStore::Sqlite(path) => {
                let conn = open_sqlite(path)?;
                let sql = format!(
                    "SELECT {} FROM courses WHERE jurusan = ?1 AND fakultas = ?2 ORDER BY id",
                    SELECT_COLUMNS
                );
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map(params![department, faculty], sqlite_row_to_course)?;
                let mut out = Vec::new();
                for r in rows {
                    out.push(r?);
                }
                out
            }
            CourseStore::Postgres(url) => {
                let sql = format!(
                    "SELECT {} FROM courses WHERE jurusan = $1 AND fakultas = $2 ORDER BY id",
                    SELECT_COLUMNS
                );
                let (dept, fac) = (department.to_string(), faculty.to_string());
                with_postgres(url, move |client| {
                    let rows = client.query(sql.as_str(), &[&dept, &fac])?;
                    let mut out = Vec::with_capacity(rows.len());
                    for r in rows.iter() {
                        out.push(pg_row_to_course(r)?);
                    }
                    Ok(out)
                })?
            }
        };
        debug!(department, faculty, count = courses.len(), "catalog loaded");
        Ok(courses)
    }

    /// Inserta un curso y devuelve el id asignado. El `id` de entrada se ignora.
    pub fn insert_course(&self, course: &Course) -> Result<i64, StoreError> {
        check_record(course)?;
        match self {
            CourseStore::Sqlite(path) => {
                let conn = open_sqlite(path)?;
                conn.execute(
                    "INSERT INTO courses (nama_mk, jurusan, fakultas, jumlah_sks, semester_min, prediksi_nilai)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        course.name,
                        course.department,
                        course.faculty,
                        course.credits,
                        course.min_semester,
                        course.predicted_grade,
                    ],
                )?;
                Ok(conn.last_insert_rowid())
            }
            CourseStore::Postgres(url) => {
                let c = course.clone();
                with_postgres(url, move |client| {
                    let row = client.query_one(
                        "INSERT INTO courses (nama_mk, jurusan, fakultas, jumlah_sks, semester_min, prediksi_nilai)
                         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
                        &[&c.name, &c.department, &c.faculty, &c.credits, &c.min_semester, &c.predicted_grade],
                    )?;
                    let id: i64 = row.try_get(0)?;
                    Ok(id)
                })
            }
        }
    }

    /// Inserta todos los cursos en una sola transacción: o entran todos o ninguno.
    pub fn insert_many(&self, courses: &[Course]) -> Result<usize, StoreError> {
        for c in courses {
            check_record(c)?;
        }
        match self {
            CourseStore::Sqlite(path) => {
                let mut conn = open_sqlite(path)?;
                let tx = conn.transaction()?;
                {
                    let mut stmt = tx.prepare(
                        "INSERT INTO courses (nama_mk, jurusan, fakultas, jumlah_sks, semester_min, prediksi_nilai)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    )?;
                    for c in courses {
                        stmt.execute(params![c.name, c.department, c.faculty, c.credits, c.min_semester, c.predicted_grade])?;
                    }
                }
                tx.commit()?;
                Ok(courses.len())
            }
            CourseStore::Postgres(url) => {
                let batch = courses.to_vec();
                with_postgres(url, move |client| {
                    let mut tx = client.transaction()?;
                    for c in &batch {
                        tx.execute(
                            "INSERT INTO courses (nama_mk, jurusan, fakultas, jumlah_sks, semester_min, prediksi_nilai)
                             VALUES ($1, $2, $3, $4, $5, $6)",
                            &[&c.name, &c.department, &c.faculty, &c.credits, &c.min_semester, &c.predicted_grade],
                        )?;
                    }
                    tx.commit()?;
                    Ok(batch.len())
                })
            }
        }
    }

    /// Borra por id. Devuelve `false` si no existía.
    pub fn delete_course(&self, id: i64) -> Result<bool, StoreError> {
        match self {
            CourseStore::Sqlite(path) => {
                let conn = open_sqlite(path)?;
                let n = conn.execute("DELETE FROM courses WHERE id = ?1", params![id])?;
                Ok(n > 0)
            }
            CourseStore::Postgres(url) => with_postgres(url, move |client| {
                let n = client.execute("DELETE FROM courses WHERE id = $1", &[&id])?;
                Ok(n > 0)
            }),
        }
    }
}
