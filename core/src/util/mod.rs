mod compare;
pub use compare::constant_time_eq;

mod util;
pub use util::{getenv, getenv_default, truncate_to};
