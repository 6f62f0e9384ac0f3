// Domain layer: the numeral table, conversion records and ports (interfaces).

pub mod model;
pub mod ports;
