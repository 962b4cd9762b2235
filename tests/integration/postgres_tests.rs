//! PostgreSQL store tests
//!
//! Each test gets a fresh database with `./migrations` applied and
//! `fixtures/seed.sql` loaded. Run with:
//! `DATABASE_URL=postgres://... cargo test --test postgres_tests -- --ignored`

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use library_desk::{
    api::create_router,
    models::{AcceptedPaper, AvailableBook, BorrowRecord, BorrowedBook, PublishedBook, ReaderProfile, SupplierReading},
    repository::{Connector, LibraryStore, PgConnector},
    AppState,
};
use sqlx::PgPool;
use tower::ServiceExt;

fn connector(pool: &PgPool) -> Arc<PgConnector> {
    Arc::new(PgConnector::from_options((*pool.connect_options()).clone()))
}

async fn store(pool: &PgPool) -> Result<Box<dyn LibraryStore>> {
    Ok(connector(pool).connect().await?)
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

async fn borrow_records(pool: &PgPool) -> Result<Vec<BorrowRecord>> {
    let rows = sqlx::query_as::<_, BorrowRecord>("SELECT id, uni, time FROM borrow ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Borrow reading `id` from `tasks` sessions at once and count the winners
async fn race_borrows(pool: &PgPool, id: &str, tasks: usize) -> Result<usize> {
    let connector = connector(pool);
    let mut handles = Vec::new();
    for _ in 0..tasks {
        let connector = connector.clone();
        let id = id.to_string();
        handles.push(tokio::spawn(async move {
            let mut store = connector.connect().await?;
            store.borrow_reading(&id, "abc123", day()).await
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await?? {
            winners += 1;
        }
    }
    Ok(winners)
}

fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, v.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Result<(StatusCode, String)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

fn borrow_form(reading: &str) -> Request<Body> {
    form_request(
        "/borrowbooks",
        &[("name8", "lib1"), ("name9", "libpass1"), ("name10", "abc123"), ("name11", reading)],
    )
}

#[sqlx::test(fixtures("seed"))]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_catalog_queries(pool: PgPool) -> Result<()> {
    let mut store = store(&pool).await?;

    let names = store.list_names().await?;
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"ada lovelace".to_string()));

    assert!(store.borrowed_books().await?.is_empty());
    let available = store.available_books().await?;
    assert_eq!(
        available.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
        vec!["5", "6", "7"]
    );

    let mut suppliers = store.list_suppliers().await?;
    suppliers.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(suppliers.len(), 2);
    assert_eq!(suppliers[0].name, "Acme Books");
    assert_eq!(suppliers[0].addr, "12 Main St");

    assert_eq!(
        store.readings_by_supplier("Acme Books").await?,
        vec![SupplierReading {
            id: "5".to_string(),
            author: "Knuth".to_string(),
            supplier: "Acme Books".to_string(),
        }]
    );
    assert!(store.readings_by_supplier("Nobody").await?.is_empty());

    assert_eq!(
        store.books_by_title("The Art of Computer Programming").await?,
        vec![PublishedBook {
            id: "5".to_string(),
            title: "The Art of Computer Programming".to_string(),
            publisher: "Addison-Wesley".to_string(),
        }]
    );
    assert!(store.books_by_title("Time, Clocks").await?.is_empty());

    assert_eq!(
        store.papers_by_title("Time, Clocks").await?,
        vec![AcceptedPaper {
            id: "7".to_string(),
            title: "Time, Clocks".to_string(),
            conference: "CACM".to_string(),
            conference_addr: "New York".to_string(),
        }]
    );

    assert!(store.reading_exists("6").await?);
    assert!(!store.reading_exists("99").await?);
    store.ping().await?;
    Ok(())
}

#[sqlx::test(fixtures("seed"))]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_account_queries(pool: PgPool) -> Result<()> {
    let mut store = store(&pool).await?;

    assert!(store.admin_authenticates("admin", "adminpw").await?);
    assert!(!store.admin_authenticates("admin", "wrong").await?);

    assert!(store.librarian_authenticates("lib1", "libpass1").await?);
    assert!(!store.librarian_authenticates("lib1", "wrong").await?);
    assert!(store.librarian_exists("lib1").await?);
    assert!(!store.librarian_exists("lib9").await?);

    store.set_librarian_password("lib1", "newpass99").await?;
    assert!(store.librarian_authenticates("lib1", "newpass99").await?);
    assert!(!store.librarian_authenticates("lib1", "libpass1").await?);

    assert!(store.reader_exists("abc123").await?);
    assert!(!store.reader_exists("zzz999").await?);
    assert_eq!(
        store.reader_profile("abc123", "pw123456").await?,
        Some(ReaderProfile {
            uni: "abc123".to_string(),
            name: "Ann".to_string(),
            dept: "CS".to_string(),
        })
    );
    assert_eq!(store.reader_profile("abc123", "wrong").await?, None);
    Ok(())
}

#[sqlx::test(fixtures("seed"))]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_borrow_and_return(pool: PgPool) -> Result<()> {
    let mut store = store(&pool).await?;

    assert!(!store.is_borrowed("5").await?);
    assert!(store.borrow_reading("5", "abc123", day()).await?);
    assert!(!store.borrow_reading("5", "abc123", day()).await?);

    assert!(store.is_borrowed("5").await?);
    assert!(store.is_borrowed_by("5", "abc123").await?);
    assert!(!store.is_borrowed_by("5", "zzz999").await?);
    assert_eq!(store.borrowed_by("abc123").await?, vec!["5".to_string()]);

    assert_eq!(
        store.borrowed_books().await?,
        vec![BorrowedBook {
            id: "5".to_string(),
            author: "Knuth".to_string(),
            reader: "abc123".to_string(),
            borrowed_on: day(),
        }]
    );
    assert_eq!(
        store.available_books().await?,
        vec![
            AvailableBook { id: "6".to_string(), author: "Hopper".to_string() },
            AvailableBook { id: "7".to_string(), author: "Lamport".to_string() },
        ]
    );

    assert!(!store.return_reading("5", "zzz999").await?);
    assert!(store.return_reading("5", "abc123").await?);
    assert!(!store.return_reading("5", "abc123").await?);
    assert!(borrow_records(&pool).await?.is_empty());
    Ok(())
}

#[sqlx::test(fixtures("seed"))]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_concurrent_borrows_insert_one_record(pool: PgPool) -> Result<()> {
    assert_eq!(race_borrows(&pool, "5", 16).await?, 1);
    assert_eq!(
        borrow_records(&pool).await?,
        vec![BorrowRecord { id: "5".to_string(), uni: "abc123".to_string(), time: day() }]
    );
    Ok(())
}

#[sqlx::test(fixtures("seed"))]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_concurrent_borrows_without_primary_key(pool: PgPool) -> Result<()> {
    sqlx::query("ALTER TABLE borrow DROP CONSTRAINT borrow_pkey")
        .execute(&pool)
        .await?;

    assert_eq!(race_borrows(&pool, "5", 16).await?, 1);
    assert_eq!(borrow_records(&pool).await?.len(), 1);
    Ok(())
}

#[sqlx::test(fixtures("seed"))]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_router_over_postgres(pool: PgPool) -> Result<()> {
    let app = create_router(AppState { database: connector(&pool) });

    let (status, body) = send(app.clone(), Request::get("/books").body(Body::empty())?).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Knuth"));

    let (status, _) = send(app.clone(), borrow_form("5")).await?;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (status, body) = send(app.clone(), borrow_form("5")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Already borrowed"));

    let (_, body) = send(
        app.clone(),
        form_request("/checkmyinfo", &[("name16", "abc123"), ("name17", "pw123456")]),
    )
    .await?;
    assert!(body.contains("<li>5</li>"));

    let (status, _) = send(
        app.clone(),
        form_request(
            "/editlibrarians",
            &[("name4", "admin"), ("name5", "adminpw"), ("name6", "lib1"), ("name7", "newpass99")],
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (status, body) = send(app, borrow_form("6")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Wrong password"));
    Ok(())
}

#[sqlx::test(fixtures("seed"))]
#[ignore = "requires a PostgreSQL server (DATABASE_URL)"]
async fn test_concurrent_borrow_requests_one_wins(pool: PgPool) -> Result<()> {
    let app = create_router(AppState { database: connector(&pool) });

    let mut handles = Vec::new();
    for _ in 0..16 {
        let app = app.clone();
        handles.push(tokio::spawn(async move { send(app, borrow_form("5")).await }));
    }

    let mut winners = 0;
    for handle in handles {
        let (status, body) = handle.await??;
        if status == StatusCode::SEE_OTHER {
            winners += 1;
        } else {
            assert!(body.contains("Already borrowed"));
        }
    }
    assert_eq!(winners, 1);
    Ok(())
}
