// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::catalog::CurrencyCatalog;
use crate::models::Currency;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use sqlx::sqlite::SqlitePool;

/// Insert a currency into the database
pub async fn insert_currency(pool: &SqlitePool, code: &str, name: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO currencies (code, name)
        VALUES (?, ?)
        ON CONFLICT(code) DO UPDATE SET
            name = excluded.name,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(code)
    .bind(name)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get a currency from the database by its code
pub async fn get_currency(pool: &SqlitePool, code: &str) -> Result<Option<Currency>> {
    let record = sqlx::query_as::<_, (String, String)>(
        r#"
        SELECT code, name
        FROM currencies
        WHERE code = ?
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(record.map(|(code, name)| Currency { code, name }))
}

/// List all currencies in the database
pub async fn list_currencies(pool: &SqlitePool) -> Result<Vec<Currency>> {
    let records = sqlx::query_as::<_, (String, String)>(
        r#"
        SELECT code, name
        FROM currencies
        ORDER BY code
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(records
        .into_iter()
        .map(|(code, name)| Currency { code, name })
        .collect())
}

/// Upsert every catalog entry into the currencies table, returning how many were written
pub async fn sync_catalog(pool: &SqlitePool, catalog: &CurrencyCatalog) -> Result<usize> {
    let progress = ProgressBar::new(catalog.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("=>-"),
    );

    let mut tx = pool.begin().await?;
    for (code, name) in catalog.iter() {
        sqlx::query(
            r#"
            INSERT INTO currencies (code, name)
            VALUES (?, ?)
            ON CONFLICT(code) DO UPDATE SET
                name = excluded.name,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(code)
        .bind(name)
        .execute(&mut *tx)
        .await?;
        progress.set_message(code);
        progress.inc(1);
    }
    tx.commit().await?;
    progress.finish_and_clear();

    tracing::info!("synced {} currencies", catalog.len());
    Ok(catalog.len())
}
