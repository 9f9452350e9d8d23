use async_trait::async_trait;
use minidns_application::ports::RecordRepository;
use minidns_domain::{DnsRecord, DomainError, RecordType};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type RecordRow = (i64, String, String, String);

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> DnsRecord {
        let (id, hostname, record_type, value) = row;
        DnsRecord {
            id: Some(id),
            hostname,
            // the CHECK constraint only admits 'A' and 'CNAME'
            record_type: record_type.parse::<RecordType>().unwrap_or(RecordType::A),
            value,
        }
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn insert(&self, record: &DnsRecord) -> Result<DnsRecord, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "INSERT INTO records (hostname, record_type, value)
             VALUES (?, ?, ?)
             RETURNING id, hostname, record_type, value",
        )
        .bind(&record.hostname)
        .bind(record.record_type.as_str())
        .bind(&record.value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                DomainError::DuplicateRecord(format!(
                    "{} {} {}",
                    record.hostname, record.record_type, record.value
                ))
            } else {
                error!(error = %e, "Failed to insert record");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        Ok(Self::row_to_record(row))
    }

    #[instrument(skip(self))]
    async fn find_by_hostname(&self, hostname: &str) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, hostname, record_type, value
             FROM records WHERE hostname = ? ORDER BY id ASC",
        )
        .bind(hostname)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query records by hostname");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_hostname_and_type(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, hostname, record_type, value
             FROM records WHERE hostname = ? AND record_type = ? ORDER BY id ASC",
        )
        .bind(hostname)
        .bind(record_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query records by hostname and type");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn delete_exact(
        &self,
        hostname: &str,
        record_type: RecordType,
        value: &str,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "DELETE FROM records WHERE hostname = ? AND record_type = ? AND value = ?",
        )
        .bind(hostname)
        .bind(record_type.as_str())
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to delete record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected())
    }
}
