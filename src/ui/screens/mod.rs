pub(crate) mod dashboard;
pub(crate) mod home;
pub(crate) mod transactions;
