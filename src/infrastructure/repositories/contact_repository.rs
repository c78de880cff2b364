//! Contact Repository Implementation
//!
//! PostgreSQL implementation of the ContactRepository trait.
//! Maps between the `contacts` table and the domain Contact entity.

use std::time::Instant;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{BirthdayWindow, Contact, ContactDetails, ContactRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Column list shared by every query returning whole contacts.
const CONTACT_COLUMNS: &str =
    "id, first_name, last_name, email, phone_number, birthdate, additional_info";

/// Database row representation of the contacts table.
#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    birthdate: NaiveDate,
    additional_info: Option<String>,
}

impl ContactRow {
    /// Convert database row to domain Contact entity.
    fn into_contact(self) -> Contact {
        Contact {
            id: self.id,
            details: ContactDetails {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                phone_number: self.phone_number,
                birthdate: self.birthdate,
                additional_info: self.additional_info,
            },
        }
    }
}

/// Turn user input into an `ILIKE` pattern that matches it as a literal
/// substring. Backslash is the default `LIKE` escape character in PostgreSQL.
fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// PostgreSQL contact repository implementation.
///
/// Connections are checked out of the pool for the duration of a single
/// statement and returned when the query future completes or is dropped.
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, details: &ContactDetails) -> Result<Contact, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            r#"
            INSERT INTO contacts (first_name, last_name, email, phone_number, birthdate, additional_info)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(&details.email)
        .bind(&details.phone_number)
        .bind(details.birthdate)
        .bind(&details.additional_info)
        .fetch_one(&self.pool)
        .await?;

        metrics::record_db_query("insert", started.elapsed().as_secs_f64());
        Ok(row.into_contact())
    }

    /// Ordered by id, which follows insertion order for a BIGSERIAL key.
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Contact>, AppError> {
        let started = Instant::now();
        let rows = sqlx::query_as::<_, ContactRow>(&format!(
            r#"
            SELECT {CONTACT_COLUMNS}
            FROM contacts
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        metrics::record_db_query("list", started.elapsed().as_secs_f64());
        Ok(rows.into_iter().map(ContactRow::into_contact).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        metrics::record_db_query("find_by_id", started.elapsed().as_secs_f64());
        Ok(row.map(ContactRow::into_contact))
    }

    /// Single statement, so a missing row leaves the table untouched.
    async fn update(&self, id: i64, details: &ContactDetails) -> Result<Option<Contact>, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            r#"
            UPDATE contacts
            SET first_name = $2,
                last_name = $3,
                email = $4,
                phone_number = $5,
                birthdate = $6,
                additional_info = $7
            WHERE id = $1
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(&details.email)
        .bind(&details.phone_number)
        .bind(details.birthdate)
        .bind(&details.additional_info)
        .fetch_optional(&self.pool)
        .await?;

        metrics::record_db_query("update", started.elapsed().as_secs_f64());
        Ok(row.map(ContactRow::into_contact))
    }

    async fn delete(&self, id: i64) -> Result<Option<Contact>, AppError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "DELETE FROM contacts WHERE id = $1 RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        metrics::record_db_query("delete", started.elapsed().as_secs_f64());
        Ok(row.map(ContactRow::into_contact))
    }

    async fn search(&self, query: &str) -> Result<Vec<Contact>, AppError> {
        let started = Instant::now();
        let rows = sqlx::query_as::<_, ContactRow>(&format!(
            r#"
            SELECT {CONTACT_COLUMNS}
            FROM contacts
            WHERE first_name ILIKE $1
               OR last_name ILIKE $1
               OR email ILIKE $1
            ORDER BY id
            "#
        ))
        .bind(contains_pattern(query))
        .fetch_all(&self.pool)
        .await?;

        metrics::record_db_query("search", started.elapsed().as_secs_f64());
        Ok(rows.into_iter().map(ContactRow::into_contact).collect())
    }

    /// Matches (month, day) of the stored date against the window's pairs,
    /// passed as two parallel integer arrays.
    async fn find_birthdays_in(&self, window: &BirthdayWindow) -> Result<Vec<Contact>, AppError> {
        let (months, days) = window.month_day_columns();

        let started = Instant::now();
        let rows = sqlx::query_as::<_, ContactRow>(&format!(
            r#"
            SELECT {CONTACT_COLUMNS}
            FROM contacts
            WHERE (EXTRACT(MONTH FROM birthdate)::int, EXTRACT(DAY FROM birthdate)::int)
                  IN (SELECT * FROM UNNEST($1::int[], $2::int[]))
            ORDER BY id
            "#
        ))
        .bind(months)
        .bind(days)
        .fetch_all(&self.pool)
        .await?;

        metrics::record_db_query("birthdays", started.elapsed().as_secs_f64());
        Ok(rows.into_iter().map(ContactRow::into_contact).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
