use minidns_application::ports::RecordRepository;
use minidns_domain::{DnsRecord, DomainError, RecordType};
use minidns_infrastructure::database::MIGRATOR;
use minidns_infrastructure::repositories::SqliteRecordRepository;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    // a single connection keeps the in-memory database alive and shared
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}

#[tokio::test]
async fn test_insert_assigns_id() {
    let repo = SqliteRecordRepository::new(test_pool().await);
    let record = DnsRecord::new("example.com", RecordType::A, "1.2.3.4");

    let created = repo.insert(&record).await.unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.hostname, "example.com");
    assert_eq!(created.record_type, RecordType::A);
    assert_eq!(created.value, "1.2.3.4");
}

#[tokio::test]
async fn test_find_by_hostname_preserves_insertion_order() {
    let repo = SqliteRecordRepository::new(test_pool().await);
    for ip in ["1.1.1.1", "1.1.1.2", "1.1.1.3"] {
        repo.insert(&DnsRecord::new("a.com", RecordType::A, ip))
            .await
            .unwrap();
    }
    repo.insert(&DnsRecord::new("b.com", RecordType::A, "2.2.2.2"))
        .await
        .unwrap();

    let records = repo.find_by_hostname("a.com").await.unwrap();

    let values: Vec<&str> = records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["1.1.1.1", "1.1.1.2", "1.1.1.3"]);
}

#[tokio::test]
async fn test_find_by_hostname_and_type_filters() {
    let repo = SqliteRecordRepository::new(test_pool().await);
    repo.insert(&DnsRecord::new("a.com", RecordType::Cname, "b.com"))
        .await
        .unwrap();
    repo.insert(&DnsRecord::new("b.com", RecordType::A, "1.1.1.1"))
        .await
        .unwrap();

    let cnames = repo
        .find_by_hostname_and_type("a.com", RecordType::Cname)
        .await
        .unwrap();
    let a_records = repo
        .find_by_hostname_and_type("a.com", RecordType::A)
        .await
        .unwrap();

    assert_eq!(cnames.len(), 1);
    assert_eq!(cnames[0].value, "b.com");
    assert!(a_records.is_empty());
}

#[tokio::test]
async fn test_find_unknown_hostname_returns_empty() {
    let repo = SqliteRecordRepository::new(test_pool().await);

    let records = repo.find_by_hostname("missing.com").await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_unique_index_rejects_duplicate_tuple() {
    let repo = SqliteRecordRepository::new(test_pool().await);
    let record = DnsRecord::new("a.com", RecordType::A, "1.1.1.1");
    repo.insert(&record).await.unwrap();

    let result = repo.insert(&record).await;

    assert!(matches!(result, Err(DomainError::DuplicateRecord(_))));
}

#[tokio::test]
async fn test_delete_exact_removes_only_matching_row() {
    let repo = SqliteRecordRepository::new(test_pool().await);
    repo.insert(&DnsRecord::new("a.com", RecordType::A, "1.1.1.1"))
        .await
        .unwrap();
    repo.insert(&DnsRecord::new("a.com", RecordType::A, "1.1.1.2"))
        .await
        .unwrap();

    let deleted = repo
        .delete_exact("a.com", RecordType::A, "1.1.1.1")
        .await
        .unwrap();

    assert_eq!(deleted, 1);
    let remaining = repo.find_by_hostname("a.com").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].value, "1.1.1.2");
}

#[tokio::test]
async fn test_delete_exact_returns_zero_when_no_match() {
    let repo = SqliteRecordRepository::new(test_pool().await);
    repo.insert(&DnsRecord::new("a.com", RecordType::A, "1.1.1.1"))
        .await
        .unwrap();

    let deleted = repo
        .delete_exact("a.com", RecordType::Cname, "1.1.1.1")
        .await
        .unwrap();

    assert_eq!(deleted, 0);
}
