//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::Id;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::complaint::Complaint;
use crate::domain::repository::ComplaintRepository;
use crate::error::ComplaintResult;

/// PostgreSQL-backed complaint repository
#[derive(Clone)]
pub struct PgComplaintRepository {
    pool: PgPool,
}

impl PgComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ComplaintRepository for PgComplaintRepository {
    async fn create(&self, complaint: &Complaint) -> ComplaintResult<()> {
        sqlx::query(
            r#"
            INSERT INTO complaints (
                complaint_id,
                email,
                name,
                location,
                message,
                img_path,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(complaint.complaint_id.as_uuid())
        .bind(&complaint.email)
        .bind(&complaint.name)
        .bind(&complaint.location)
        .bind(&complaint.message)
        .bind(&complaint.img_path)
        .bind(complaint.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> ComplaintResult<Vec<Complaint>> {
        let rows = sqlx::query_as::<_, ComplaintRow>(
            r#"
            SELECT
                complaint_id,
                email,
                name,
                location,
                message,
                img_path,
                created_at
            FROM complaints
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ComplaintRow::into_complaint).collect())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ComplaintRow {
    complaint_id: Uuid,
    email: String,
    name: String,
    location: String,
    message: String,
    img_path: String,
    created_at: DateTime<Utc>,
}

impl ComplaintRow {
    fn into_complaint(self) -> Complaint {
        Complaint {
            complaint_id: Id::from_uuid(self.complaint_id),
            email: self.email,
            name: self.name,
            location: self.location,
            message: self.message,
            img_path: self.img_path,
            created_at: self.created_at,
        }
    }
}
