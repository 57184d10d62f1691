pub(crate) mod categories;
pub(crate) mod history;
pub(crate) mod home;
pub(crate) mod overview;
