#[derive(Clone, Debug, PartialEq)]
pub struct Airport {
    pub city: String,
}

impl Airport {
    pub fn new(city: String) -> Self {
        Airport { city }
    }
}
