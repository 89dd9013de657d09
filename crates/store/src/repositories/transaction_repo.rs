//! Repository for payment transactions, keyed by Stripe session id.

use chrono::Utc;
use nanoedit_core::error::CoreError;

use crate::models::transaction::PaymentTransaction;
use crate::Db;

pub struct TransactionRepo;

impl TransactionRepo {
    /// Record a freshly opened checkout session.
    pub async fn create(db: &Db, transaction: PaymentTransaction) -> Result<(), CoreError> {
        let mut transactions = db.transactions().write().await;
        if transactions.contains_key(&transaction.session_id) {
            return Err(CoreError::Conflict(format!(
                "Transaction for session {} already exists",
                transaction.session_id
            )));
        }
        transactions.insert(transaction.session_id.clone(), transaction);
        Ok(())
    }

    /// Point lookup by session id.
    pub async fn find_by_session(db: &Db, session_id: &str) -> Option<PaymentTransaction> {
        db.transactions().read().await.get(session_id).cloned()
    }

    /// Update the payment status reported by Stripe. Returns the previous
    /// payment status so callers can detect the pending -> paid edge.
    pub async fn update_status(
        db: &Db,
        session_id: &str,
        payment_status: &str,
        status: &str,
    ) -> Result<String, CoreError> {
        let mut transactions = db.transactions().write().await;
        let transaction = transactions
            .get_mut(session_id)
            .ok_or_else(|| CoreError::not_found("PaymentTransaction", session_id))?;
        let previous = std::mem::replace(
            &mut transaction.payment_status,
            payment_status.to_string(),
        );
        transaction.status = Some(status.to_string());
        transaction.updated_at = Utc::now();
        Ok(previous)
    }

    /// Mark a transaction as settled by the Stripe webhook.
    pub async fn mark_webhook_processed(
        db: &Db,
        session_id: &str,
        payment_status: &str,
    ) -> Result<(), CoreError> {
        let mut transactions = db.transactions().write().await;
        let transaction = transactions
            .get_mut(session_id)
            .ok_or_else(|| CoreError::not_found("PaymentTransaction", session_id))?;
        transaction.payment_status = payment_status.to_string();
        transaction.webhook_processed = true;
        transaction.updated_at = Utc::now();
        Ok(())
    }
}
