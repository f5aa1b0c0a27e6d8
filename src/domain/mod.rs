mod address;
mod branch;
mod city;
pub mod distance;
mod point;
pub mod report;

pub use address::{Address, AddressError};
pub use branch::{BRANCHES, Branch};
pub use city::{City, CityError};
pub use distance::{Nearest, geodesic_km, nearest_branch};
pub use point::{Point, PointError};
pub use report::{BranchReport, FixedMock, MockDistance, MockRangeError, Outcome, UniformMock};
