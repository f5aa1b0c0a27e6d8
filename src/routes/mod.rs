pub mod analysis;
mod health_check;

pub use analysis::{cities, closest, index, page};
pub use health_check::health_check;
