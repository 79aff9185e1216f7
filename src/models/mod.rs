mod budget;
mod category;
mod transaction;

pub(crate) use budget::BudgetState;
pub(crate) use category::Category;
pub(crate) use transaction::Transaction;

#[cfg(test)]
mod tests;
