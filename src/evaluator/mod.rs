mod decision;
mod walk;

pub use decision::evaluate_set;
pub use walk::query;
