//! Repository for generation records.
//!
//! The store enforces the lifecycle discipline: `create` is atomic, and
//! `complete`/`fail` each perform the single allowed terminal transition,
//! refusing to touch a record that is already terminal.

use nanoedit_core::error::CoreError;
use nanoedit_core::generation::GenerationStatus;
use uuid::Uuid;

use crate::models::generation::GenerationRecord;
use crate::Db;

pub struct GenerationRepo;

impl GenerationRepo {
    /// Insert a new record. The id is freshly generated at intake, so a
    /// collision is a conflict, not an upsert.
    pub async fn create(db: &Db, record: GenerationRecord) -> Result<(), CoreError> {
        let mut generations = db.generations().write().await;
        if generations.contains_key(&record.id) {
            return Err(CoreError::Conflict(format!(
                "Generation {} already exists",
                record.id
            )));
        }
        generations.insert(record.id, record);
        Ok(())
    }

    /// Point lookup by generation id.
    pub async fn find_by_id(db: &Db, id: Uuid) -> Option<GenerationRecord> {
        db.generations().read().await.get(&id).cloned()
    }

    /// Transition a record to `Completed`, attaching its result.
    ///
    /// Errors with `NotFound` for unknown ids and `Conflict` when the
    /// record is already terminal; the caller never retries either case.
    pub async fn complete(
        db: &Db,
        id: Uuid,
        outputs: Vec<String>,
        processing_time_ms: u64,
    ) -> Result<(), CoreError> {
        let mut generations = db.generations().write().await;
        let record = generations
            .get_mut(&id)
            .ok_or_else(|| CoreError::not_found("Generation", id))?;
        if record.status.is_terminal() {
            return Err(CoreError::Conflict(format!(
                "Generation {id} is already {}",
                record.status.as_str()
            )));
        }
        record.status = GenerationStatus::Completed;
        record.outputs = outputs;
        record.processing_time_ms = Some(processing_time_ms);
        Ok(())
    }

    /// Transition a record to `Failed`, attaching the cause.
    pub async fn fail(db: &Db, id: Uuid, error: String) -> Result<(), CoreError> {
        let mut generations = db.generations().write().await;
        let record = generations
            .get_mut(&id)
            .ok_or_else(|| CoreError::not_found("Generation", id))?;
        if record.status.is_terminal() {
            return Err(CoreError::Conflict(format!(
                "Generation {id} is already {}",
                record.status.as_str()
            )));
        }
        record.status = GenerationStatus::Failed;
        record.error = Some(error);
        Ok(())
    }

    /// All records for a session, newest first.
    pub async fn list_for_session(db: &Db, session_id: &str) -> Vec<GenerationRecord> {
        let generations = db.generations().read().await;
        let mut records: Vec<GenerationRecord> = generations
            .values()
            .filter(|r| r.session_id == session_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    /// Total number of stored records.
    pub async fn count(db: &Db) -> usize {
        db.generations().read().await.len()
    }
}
