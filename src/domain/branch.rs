use crate::domain::{Address, Point};

/// A bank branch the customer could book an appointment at.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Branch {
    pub address: Address,
    pub location: Point,
}

impl Branch {
    pub const fn new(address: Address, location: Point) -> Self {
        Self { address, location }
    }
}

/// Branches in Bologna, in listing order.
pub static BRANCHES: [Branch; 5] = [
    Branch::new(
        Address::from_static("Via Riva Reno, 23/A"),
        Point::new(44.4950, 11.3489),
    ),
    Branch::new(
        Address::from_static("Via D'Azeglio, 59"),
        Point::new(44.4922, 11.3445),
    ),
    Branch::new(
        Address::from_static("Piazza Maggiore, 5/B"),
        Point::new(44.4938, 11.3412),
    ),
    Branch::new(
        Address::from_static("Via Trattati Comunitari Europei 1957-2007, 19"),
        Point::new(44.4981, 11.3564),
    ),
    Branch::new(
        Address::from_static("Via Pirandello, 22/C - Villaggio Pilastro"),
        Point::new(44.5204, 11.3689),
    ),
];
