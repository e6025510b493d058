use crate::domain::model::Vehicle;

/// Value `data` holds before its single reassignment.
pub const INITIAL_DATA: i64 = 42;

/// Value `data` holds once initialisation is done.
pub const DATA: i64 = 10;

/// Returns `data` after it has been assigned and then reassigned once.
pub fn data() -> i64 {
    let mut data = INITIAL_DATA;
    tracing::trace!(data, "data assigned");
    data = DATA;
    tracing::trace!(data, "data reassigned");
    data
}

/// Record A: blue BMW, top speed unknown.
pub fn car_a() -> Vehicle {
    Vehicle::new("blue", "BMW")
}

/// Record B: red Mercedes with a top speed of 100.
pub fn car_b() -> Vehicle {
    Vehicle::new("red", "Mercedes").with_top_speed(100.0)
}

/// Ordered, read-only sequence of vehicles.
///
/// Records are fixed once the catalog is built; callers only ever get shared
/// access to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// The two built-in records, in order `[A, B]`.
    pub fn builtin() -> Self {
        let catalog = Self::new(vec![car_a(), car_b()]);
        tracing::debug!("Built catalog with {} vehicles", catalog.len());
        catalog
    }

    pub fn as_slice(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.vehicles.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Vehicle> {
        self.vehicles.get(index)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Vehicle;
    type IntoIter = std::slice::Iter<'a, Vehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Shorthand for [`Catalog::builtin`].
pub fn cars() -> Catalog {
    Catalog::builtin()
}
