use crate::models::Transaction;

/// Append-only list of expenses, seeded once at construction.
#[derive(Debug, Clone, Default)]
pub(crate) struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub(crate) fn new(seed: Vec<Transaction>) -> Self {
        Self { transactions: seed }
    }

    pub(crate) fn append(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }
}
