//! Route assembly and results.

mod assembler;
mod result;

pub use assembler::assemble;
pub use result::{Infeasibility, Leg, RouteResult, Tour};
