use crate::database::PersonRepository;
use crate::domain::{NewPerson, Person};
use crate::features::persons::model::DbPerson;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

// every operation holds its connection for exactly one statement; dropping `conn` hands it back
#[async_trait]
impl PersonRepository for SqliteRepository {
    async fn list_persons(&self) -> Result<Vec<Person>> {
        let mut conn = self.pool.acquire().await?;
        let db_persons =
            sqlx::query_as::<_, DbPerson>("SELECT id, name, age FROM persons ORDER BY id DESC")
                .fetch_all(&mut *conn)
                .await
                .context("Failed to list persons")?;

        Ok(db_persons.into_iter().map(Person::from).collect())
    }

    async fn get_person(&self, id: i64) -> Result<Option<Person>> {
        let mut conn = self.pool.acquire().await?;
        let db_person_opt =
            sqlx::query_as::<_, DbPerson>("SELECT id, name, age FROM persons WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
                .with_context(|| format!("Failed to fetch person {}", id))?;

        Ok(db_person_opt.map(Person::from))
    }

    async fn insert_person(&self, person: &NewPerson) -> Result<i64> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("INSERT INTO persons (name, age) VALUES (?, ?)")
            .bind(&person.name)
            .bind(person.age)
            .execute(&mut *conn)
            .await
            .with_context(|| format!("Failed to insert person {}", person.name))?;

        Ok(result.last_insert_rowid())
    }

    async fn update_person(&self, id: i64, person: &NewPerson) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("UPDATE persons SET name = ?, age = ? WHERE id = ?")
            .bind(&person.name)
            .bind(person.age)
            .bind(id)
            .execute(&mut *conn)
            .await
            .with_context(|| format!("Failed to update person {}", id))?;

        Ok(result.rows_affected())
    }

    async fn delete_person(&self, id: i64) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .with_context(|| format!("Failed to delete person {}", id))?;

        Ok(result.rows_affected())
    }
}
