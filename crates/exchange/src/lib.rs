mod end;
mod meal;
mod start;

pub use end::*;
pub use meal::*;
pub use start::*;
