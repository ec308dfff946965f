mod driver_kind;

pub use driver_kind::DriverKind;
